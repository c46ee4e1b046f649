use serde::{Deserialize, Serialize};

use super::{
    extent_box, local_box_outline_distance, rotated_box_bounds, to_local, DesignerShape, Point,
};
use crate::geometry::Bounds;
use sketchdeck_core::constants::GEOMETRY_EPSILON;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignEllipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// Rotation angle in degrees about the center
    #[serde(default)]
    pub rotation: f64,
}

impl DesignEllipse {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            rotation: 0.0,
        }
    }

    fn is_flat(&self) -> bool {
        self.rx <= GEOMETRY_EPSILON || self.ry <= GEOMETRY_EPSILON
    }
}

impl DesignerShape for DesignEllipse {
    fn bounds(&self) -> Bounds {
        rotated_box_bounds(self.center, self.rx * 2.0, self.ry * 2.0, self.rotation)
    }

    fn contains_interior(&self, p: Point) -> bool {
        if self.is_flat() {
            return false;
        }
        let local = to_local(p, self.center, self.rotation);
        let nx = local.x / self.rx;
        let ny = local.y / self.ry;
        nx * nx + ny * ny <= 1.0
    }

    fn distance_to_outline(&self, p: Point) -> f64 {
        let local = to_local(p, self.center, self.rotation);
        if self.is_flat() {
            // collapsed to a segment along one axis
            return local_box_outline_distance(local, self.rx, self.ry);
        }

        let nx = local.x / self.rx;
        let ny = local.y / self.ry;
        let f = (nx * nx + ny * ny).sqrt();
        if f <= GEOMETRY_EPSILON {
            return self.rx.min(self.ry);
        }
        // Radial distance to the outline; exact for circles and close enough
        // near the boundary of an ellipse.
        let radius = (local.x * local.x + local.y * local.y).sqrt();
        radius * (1.0 - 1.0 / f).abs()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.offset(dx, dy);
    }

    fn set_extent(&mut self, origin: Point, current: Point) {
        let (center, width, height) = extent_box(origin, current);
        self.center = center;
        self.rx = width / 2.0;
        self.ry = height / 2.0;
    }
}
