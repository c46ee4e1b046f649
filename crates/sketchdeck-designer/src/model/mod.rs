//! Shape geometry for scene elements.
//!
//! Every element carries one [`Shape`]. Shapes know their own outline and
//! interior; style-dependent decisions (is the interior filled?) are made by
//! the hit tester in [`crate::geometry`].

use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;

mod diamond;
mod ellipse;
mod line;
mod rectangle;
mod text;

pub use diamond::DesignDiamond;
pub use ellipse::DesignEllipse;
pub use line::DesignLine;
pub use rectangle::DesignRectangle;
pub use text::DesignText;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Geometry shared by every shape kind.
pub trait DesignerShape {
    /// Axis-aligned bounds, including rotation.
    fn bounds(&self) -> Bounds;

    /// Whether `p` lies inside the fillable region. Zero-area shapes never
    /// contain anything.
    fn contains_interior(&self, p: Point) -> bool;

    /// Distance from `p` to the nearest point of the outline.
    fn distance_to_outline(&self, p: Point) -> f64;

    fn translate(&mut self, dx: f64, dy: f64);

    /// Reshape from a creation drag that started at `origin` and is now at
    /// `current`.
    fn set_extent(&mut self, origin: Point, current: Point);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Ellipse,
    Diamond,
    Line,
    Text,
}

impl ShapeType {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeType::Rectangle => "rectangle",
            ShapeType::Ellipse => "ellipse",
            ShapeType::Diamond => "diamond",
            ShapeType::Line => "line",
            ShapeType::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    Diamond(DesignDiamond),
    Line(DesignLine),
    Text(DesignText),
}

impl DesignerShape for Shape {
    fn bounds(&self) -> Bounds {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Diamond(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    fn contains_interior(&self, p: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_interior(p),
            Shape::Ellipse(s) => s.contains_interior(p),
            Shape::Diamond(s) => s.contains_interior(p),
            Shape::Line(s) => s.contains_interior(p),
            Shape::Text(s) => s.contains_interior(p),
        }
    }

    fn distance_to_outline(&self, p: Point) -> f64 {
        match self {
            Shape::Rectangle(s) => s.distance_to_outline(p),
            Shape::Ellipse(s) => s.distance_to_outline(p),
            Shape::Diamond(s) => s.distance_to_outline(p),
            Shape::Line(s) => s.distance_to_outline(p),
            Shape::Text(s) => s.distance_to_outline(p),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Diamond(s) => s.translate(dx, dy),
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Text(s) => s.translate(dx, dy),
        }
    }

    fn set_extent(&mut self, origin: Point, current: Point) {
        match self {
            Shape::Rectangle(s) => s.set_extent(origin, current),
            Shape::Ellipse(s) => s.set_extent(origin, current),
            Shape::Diamond(s) => s.set_extent(origin, current),
            Shape::Line(s) => s.set_extent(origin, current),
            Shape::Text(s) => s.set_extent(origin, current),
        }
    }
}

impl Shape {
    /// A zero-sized shape of `kind` anchored at `origin`, ready to be
    /// stretched by [`DesignerShape::set_extent`].
    pub fn at(kind: ShapeType, origin: Point) -> Self {
        match kind {
            ShapeType::Rectangle => Shape::Rectangle(DesignRectangle::new(origin.x, origin.y, 0.0, 0.0)),
            ShapeType::Ellipse => Shape::Ellipse(DesignEllipse::new(origin, 0.0, 0.0)),
            ShapeType::Diamond => Shape::Diamond(DesignDiamond::new(origin.x, origin.y, 0.0, 0.0)),
            ShapeType::Line => Shape::Line(DesignLine::new(origin, origin)),
            ShapeType::Text => Shape::Text(DesignText::new(String::new(), origin.x, origin.y)),
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Diamond(_) => ShapeType::Diamond,
            Shape::Line(_) => ShapeType::Line,
            Shape::Text(_) => ShapeType::Text,
        }
    }

    /// Whether the interior can ever be filled. Lines are outline-only and text
    /// is always treated as solid.
    pub fn has_interior(&self) -> bool {
        !matches!(self, Shape::Line(_))
    }

    pub fn always_solid(&self) -> bool {
        matches!(self, Shape::Text(_))
    }

    /// True when the shape has no extent along either axis.
    pub fn is_degenerate(&self) -> bool {
        let b = self.bounds();
        b.width() <= sketchdeck_core::constants::GEOMETRY_EPSILON
            && b.height() <= sketchdeck_core::constants::GEOMETRY_EPSILON
    }
}

pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    let angle_rad = angle_deg.to_radians();
    let s = angle_rad.sin();
    let c = angle_rad.cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

/// Map `p` into the unrotated frame of a box centered on `center`.
pub(crate) fn to_local(p: Point, center: Point, angle_deg: f64) -> Point {
    let q = rotate_point(p, center, -angle_deg);
    Point::new(q.x - center.x, q.y - center.y)
}

/// Bounds of a `width` x `height` box centered on `center` and rotated by
/// `angle_deg` about its center.
pub(crate) fn rotated_box_bounds(center: Point, width: f64, height: f64, angle_deg: f64) -> Bounds {
    let hw = width / 2.0;
    let hh = height / 2.0;
    if angle_deg.abs() < 1e-9 {
        return Bounds::new(center.x - hw, center.y - hh, center.x + hw, center.y + hh);
    }
    let corners = [
        Point::new(center.x - hw, center.y - hh),
        Point::new(center.x + hw, center.y - hh),
        Point::new(center.x + hw, center.y + hh),
        Point::new(center.x - hw, center.y + hh),
    ];
    Bounds::from_points(corners.iter().map(|c| rotate_point(*c, center, angle_deg)))
}

/// Distance from a local-frame point to the outline of an axis-aligned box of
/// half extents `hw`, `hh` centered on the origin. Degenerate boxes collapse to
/// a segment or a point.
pub(crate) fn local_box_outline_distance(local: Point, hw: f64, hh: f64) -> f64 {
    let ax = local.x.abs();
    let ay = local.y.abs();
    let ox = ax - hw;
    let oy = ay - hh;
    if ox <= 0.0 && oy <= 0.0 {
        // inside: nearest edge
        (-ox).min(-oy)
    } else {
        let dx = ox.max(0.0);
        let dy = oy.max(0.0);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Normalized center, width and height of the box spanned by a creation drag.
pub(crate) fn extent_box(origin: Point, current: Point) -> (Point, f64, f64) {
    (
        origin.midpoint(&current),
        (current.x - origin.x).abs(),
        (current.y - origin.y).abs(),
    )
}
