//! Text shape.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Immutable text anchored at a world-space point.
///
/// The height is the font height in world units; the renderer scales it
/// into a usable font size (see the text transform in the viewport).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The text to render.
    pub text: String,
    /// The anchor point (text baseline origin).
    pub anchor: Point,
    /// Font height in world units.
    pub height: f64,
    /// Rotation in degrees about the anchor.
    pub rotate: f64,
}

impl Text {
    /// Create text at an anchor point with a world-unit font height.
    pub fn new(text: impl Into<String>, x: f64, y: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            anchor: Point::new(x, y),
            height,
            rotate: 0.0,
        }
    }

    /// Set the rotation about the anchor.
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }
}
