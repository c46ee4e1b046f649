//! Bounding boxes and hit-testing predicates.
//!
//! All coordinates are world coordinates. Tolerances passed in here are
//! already converted from screen pixels by the caller.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::model::{DesignerShape, Point};
use sketchdeck_core::constants::GEOMETRY_EPSILON;

/// Axis-aligned bounding box.
///
/// Constructors normalize reversed corners and replace non-finite values with
/// zero, so every element has a deterministic box even with broken geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

impl Bounds {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (x1, y1, x2, y2) = (
            finite_or_zero(x1),
            finite_or_zero(y1),
            finite_or_zero(x2),
            finite_or_zero(y2),
        );
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Smallest box containing every point. Empty input yields the zero box.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        iter.fold(Self::from_corners(first, first), |acc, p| {
            acc.union(&Self::from_corners(p, p))
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn has_area(&self) -> bool {
        self.width() > GEOMETRY_EPSILON && self.height() > GEOMETRY_EPSILON
    }

    /// Point containment with the box grown by `tolerance` on every side.
    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let grown = self.expand(tolerance);
        p.x >= grown.min_x && p.x <= grown.max_x && p.y >= grown.min_y && p.y <= grown.max_y
    }

    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        if !self.intersects(other) {
            return None;
        }
        Some(Bounds {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        })
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn union_all<'a, I: IntoIterator<Item = &'a Bounds>>(boxes: I) -> Option<Bounds> {
        boxes
            .into_iter()
            .fold(None, |acc: Option<Bounds>, b| {
                Some(acc.map_or(*b, |a| a.union(b)))
            })
    }

    pub fn expand(&self, margin: f64) -> Bounds {
        Bounds {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let l2 = (b.x - a.x).powi(2) + (b.y - a.y).powi(2);
    if l2 <= GEOMETRY_EPSILON * GEOMETRY_EPSILON {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y)) / l2).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
    p.distance_to(&proj)
}

/// Shape-accurate hit test.
///
/// The outline counts within `tolerance` plus half the stroke width. The
/// interior counts only when the element is filled (text always is).
pub fn hits_element_shape(point: Point, element: &Element, tolerance: f64) -> bool {
    if element.is_deleted || !point.is_finite() {
        return false;
    }
    let shape = &element.shape;
    let slack = tolerance + element.style.stroke_width.max(0.0) / 2.0;
    if shape.distance_to_outline(point) <= slack + GEOMETRY_EPSILON {
        return true;
    }
    let filled = shape.always_solid()
        || (shape.has_interior() && !element.style.is_transparent_fill());
    filled && shape.contains_interior(point)
}

/// Coarse hit test against the element's axis-aligned bounds.
pub fn hits_bounding_box(point: Point, element: &Element, tolerance: f64) -> bool {
    if element.is_deleted || !point.is_finite() {
        return false;
    }
    element.bounds().contains_point(point, tolerance)
}
