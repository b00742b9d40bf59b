//! Cubic curve shape.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// An immutable cubic Bezier curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Start point; also the rotation anchor.
    pub start: Point,
    /// The control point nearest the start.
    pub control1: Point,
    /// The control point nearest the end.
    pub control2: Point,
    /// End point.
    pub end: Point,
    /// Rotation in degrees about the start point.
    pub rotate: f64,
}

impl Curve {
    /// Create a cubic curve from start, two control points, and end.
    pub fn new(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64, dx: f64, dy: f64) -> Self {
        Self {
            start: Point::new(ax, ay),
            control1: Point::new(bx, by),
            control2: Point::new(cx, cy),
            end: Point::new(dx, dy),
            rotate: 0.0,
        }
    }

    /// Set the rotation about the start point.
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }
}
