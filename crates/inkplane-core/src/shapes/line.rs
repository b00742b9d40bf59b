//! Line shape.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// An immutable line between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point; also the rotation anchor.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Rotation in degrees about the start point.
    pub rotate: f64,
}

impl Line {
    /// Create a line between two points.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::from_points(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Create a line between two points.
    pub fn from_points(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            rotate: 0.0,
        }
    }

    /// Set the rotation about the start point.
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }

    /// The length of the line.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }
}
