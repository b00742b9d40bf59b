//! Stroke and fill style state.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Line end cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Round,
    Square,
    Butt,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    #[default]
    Round,
    Bevel,
    Miter,
}

/// Stroke and fill style for a single draw call.
///
/// Pens are plain values: create one per draw call or cache and reuse it.
/// Every draw and fill call takes its pen explicitly; no pen state is
/// retained between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    /// Stroke and fill paint.
    pub paint: Color,
    /// Stroke width in world units.
    pub width: f64,
    /// End cap style.
    pub cap: LineCap,
    /// Join style.
    pub join: LineJoin,
    /// Dash pattern lengths in world units; empty means solid.
    pub dashes: Vec<f64>,
    /// Offset into the dash pattern.
    pub offset: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            paint: Color::from_rgba8(0, 0, 0, 255),
            width: 1.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
            dashes: Vec::new(),
            offset: 0.0,
        }
    }
}

impl Pen {
    /// Create a pen with the given paint and width.
    pub fn new(paint: Color, width: f64) -> Self {
        Self {
            paint,
            width,
            ..Self::default()
        }
    }

    /// Set the end cap style.
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the join style.
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Set the dash pattern.
    pub fn with_dashes(mut self, dashes: Vec<f64>) -> Self {
        self.dashes = dashes;
        self
    }

    /// Set the dash offset.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}
