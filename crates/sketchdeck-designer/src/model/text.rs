use serde::{Deserialize, Serialize};

use super::{
    extent_box, local_box_outline_distance, rotated_box_bounds, to_local, DesignerShape, Point,
};
use crate::geometry::Bounds;
use sketchdeck_core::constants::GEOMETRY_EPSILON;

/// A text box. The box is laid out by the host; the core only needs its frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub rotation: f64,
}

fn default_font_size() -> f64 {
    20.0
}

impl DesignText {
    pub fn new(text: String, x: f64, y: f64) -> Self {
        Self {
            text,
            x,
            y,
            width: 0.0,
            height: 0.0,
            font_size: default_font_size(),
            rotation: 0.0,
        }
    }

    fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl DesignerShape for DesignText {
    fn bounds(&self) -> Bounds {
        rotated_box_bounds(self.center(), self.width, self.height, self.rotation)
    }

    fn contains_interior(&self, p: Point) -> bool {
        if self.width <= GEOMETRY_EPSILON || self.height <= GEOMETRY_EPSILON {
            return false;
        }
        let local = to_local(p, self.center(), self.rotation);
        local.x.abs() <= self.width / 2.0 && local.y.abs() <= self.height / 2.0
    }

    fn distance_to_outline(&self, p: Point) -> f64 {
        let local = to_local(p, self.center(), self.rotation);
        local_box_outline_distance(local, self.width / 2.0, self.height / 2.0)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn set_extent(&mut self, origin: Point, current: Point) {
        let (center, width, height) = extent_box(origin, current);
        self.x = center.x - width / 2.0;
        self.y = center.y - height / 2.0;
        self.width = width;
        self.height = height;
    }
}
