//! Ellipse shape.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// An immutable ellipse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// The center; also the rotation anchor.
    pub center: Point,
    /// The radii.
    pub radii: Vec2,
    /// Rotation in degrees about the center.
    pub rotate: f64,
}

impl Ellipse {
    /// Create an ellipse from center and radii.
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            radii: Vec2::new(rx, ry),
            rotate: 0.0,
        }
    }

    /// Set the rotation about the center.
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }

    /// Create a circle.
    pub fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(cx, cy, radius, radius)
    }
}
