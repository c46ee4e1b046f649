use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point};
use crate::geometry::{distance_to_segment, Bounds};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignLine {
    pub start: Point,
    pub end: Point,
}

impl DesignLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl DesignerShape for DesignLine {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.start.x, self.start.y, self.end.x, self.end.y)
    }

    fn contains_interior(&self, _p: Point) -> bool {
        false
    }

    fn distance_to_outline(&self, p: Point) -> f64 {
        distance_to_segment(p, self.start, self.end)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.offset(dx, dy);
    }

    fn set_extent(&mut self, origin: Point, current: Point) {
        self.start = origin;
        self.end = current;
    }
}
