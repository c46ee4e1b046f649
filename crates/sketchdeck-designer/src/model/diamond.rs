use serde::{Deserialize, Serialize};

use super::{extent_box, rotated_box_bounds, to_local, DesignerShape, Point};
use crate::geometry::{distance_to_segment, Bounds};
use sketchdeck_core::constants::GEOMETRY_EPSILON;

/// A rhombus inscribed in its bounding box, vertices at the edge midpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDiamond {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    /// Rotation angle in degrees about the center
    #[serde(default)]
    pub rotation: f64,
}

impl DesignDiamond {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point::new(x + width / 2.0, y + height / 2.0),
            rotation: 0.0,
        }
    }

    /// Vertices in the local frame: top, right, bottom, left.
    fn local_vertices(&self) -> [Point; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        [
            Point::new(0.0, -hh),
            Point::new(hw, 0.0),
            Point::new(0.0, hh),
            Point::new(-hw, 0.0),
        ]
    }
}

impl DesignerShape for DesignDiamond {
    fn bounds(&self) -> Bounds {
        rotated_box_bounds(self.center, self.width, self.height, self.rotation)
    }

    fn contains_interior(&self, p: Point) -> bool {
        if self.width <= GEOMETRY_EPSILON || self.height <= GEOMETRY_EPSILON {
            return false;
        }
        let local = to_local(p, self.center, self.rotation);
        local.x.abs() / (self.width / 2.0) + local.y.abs() / (self.height / 2.0) <= 1.0
    }

    fn distance_to_outline(&self, p: Point) -> f64 {
        let local = to_local(p, self.center, self.rotation);
        let v = self.local_vertices();
        (0..4)
            .map(|i| distance_to_segment(local, v[i], v[(i + 1) % 4]))
            .fold(f64::INFINITY, f64::min)
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
