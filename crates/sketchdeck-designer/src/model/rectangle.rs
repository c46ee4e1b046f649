use serde::{Deserialize, Serialize};

use super::{
    extent_box, local_box_outline_distance, rotated_box_bounds, to_local, DesignerShape, Point,
};
use crate::geometry::Bounds;
use sketchdeck_core::constants::GEOMETRY_EPSILON;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    /// Rotation angle in degrees about the center
    #[serde(default)]
    pub rotation: f64,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point::new(x + width / 2.0, y + height / 2.0),
            rotation: 0.0,
        }
    }
}

impl DesignerShape for DesignRectangle {
    fn bounds(&self) -> Bounds {
        rotated_box_bounds(self.center, self.width, self.height, self.rotation)
    }

    fn contains_interior(&self, p: Point) -> bool {
        if self.width <= GEOMETRY_EPSILON || self.height <= GEOMETRY_EPSILON {
            return false;
        }
        let local = to_local(p, self.center, self.rotation);
        local.x.abs() <= self.width / 2.0 && local.y.abs() <= self.height / 2.0
    }

    fn distance_to_outline(&self, p: Point) -> f64 {
        let local = to_local(p, self.center, self.rotation);
        local_box_outline_distance(local, self.width / 2.0, self.height / 2.0)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.offset(dx, dy);
    }

    fn set_extent(&mut self, origin: Point, current: Point) {
        let (center, width, height) = extent_box(origin, current);
        self.center = center;
        self.width = width;
        self.height = height;
    }
}
