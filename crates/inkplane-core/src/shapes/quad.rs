//! Quadratic curve shape.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// An immutable quadratic Bezier curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// Start point; also the rotation anchor.
    pub start: Point,
    /// The control point.
    pub control: Point,
    /// End point.
    pub end: Point,
    /// Rotation in degrees about the start point.
    pub rotate: f64,
}

impl Quad {
    /// Create a quadratic curve from start, control, and end points.
    pub fn new(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> Self {
        Self {
            start: Point::new(ax, ay),
            control: Point::new(bx, by),
            end: Point::new(cx, cy),
            rotate: 0.0,
        }
    }

    /// Set the rotation about the start point.
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }
}
