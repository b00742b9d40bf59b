//! Arc shape.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// An immutable elliptical arc in center form.
///
/// All angles are in degrees; `start` and `extent` describe the swept
/// angular range, `rotate` the rotation of the whole arc about its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// The ellipse center; also the rotation anchor.
    pub center: Point,
    /// The ellipse radii.
    pub radii: Vec2,
    /// Rotation in degrees about the center.
    pub rotate: f64,
    /// Start angle in degrees.
    pub start: f64,
    /// Angular extent in degrees.
    pub extent: f64,
}

impl Arc {
    /// Create an arc from center, radii, rotation, and angular range.
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64, rotate: f64, start: f64, extent: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            radii: Vec2::new(rx, ry),
            rotate,
            start,
            extent,
        }
    }
}
