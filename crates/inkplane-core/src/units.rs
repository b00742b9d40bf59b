//! Physical length units for world-space coordinates.

use serde::{Deserialize, Serialize};

/// Inches per meter, the bridge between the metric units and DPI.
const INCHES_PER_METER: f64 = 1.0 / 0.0254;

/// A physical length unit with a fixed conversion factor to inches.
///
/// World coordinates are expressed in one of these units; the viewport
/// multiplies DPI (pixels per inch) by the unit factor to obtain pixels
/// per world unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    Inch,
    Foot,
    Mile,
    Meter,
    #[default]
    Centimeter,
    Millimeter,
    Kilometer,
}

impl LengthUnit {
    /// The conversion factor from this unit to inches.
    pub fn factor(&self) -> f64 {
        match self {
            LengthUnit::Inch => 1.0,
            LengthUnit::Foot => 12.0,
            LengthUnit::Mile => 5280.0 * 12.0,
            LengthUnit::Meter => INCHES_PER_METER,
            LengthUnit::Centimeter => 0.01 * INCHES_PER_METER,
            LengthUnit::Millimeter => 0.001 * INCHES_PER_METER,
            LengthUnit::Kilometer => 1000.0 * INCHES_PER_METER,
        }
    }

    /// Convert a value measured in this unit to inches.
    pub fn convert(&self, value: f64) -> f64 {
        value * self.factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_is_identity() {
        assert!((LengthUnit::Inch.convert(72.0) - 72.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_imperial_factors() {
        assert!((LengthUnit::Foot.convert(1.0) - 12.0).abs() < f64::EPSILON);
        assert!((LengthUnit::Mile.convert(1.0) - 63360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_metric_factors() {
        // 2.54 cm is exactly one inch
        assert!((LengthUnit::Centimeter.convert(2.54) - 1.0).abs() < 1e-12);
        assert!((LengthUnit::Millimeter.convert(25.4) - 1.0).abs() < 1e-12);
        assert!((LengthUnit::Meter.convert(0.0254) - 1.0).abs() < 1e-12);
        assert!((LengthUnit::Kilometer.convert(0.0000254) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_unit() {
        assert_eq!(LengthUnit::default(), LengthUnit::Centimeter);
    }
}
