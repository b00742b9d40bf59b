//! The immediate-mode drawing surface contract.
//!
//! The dispatcher resolves shapes against the viewport and issues these
//! primitive calls; implementations supply the pixels (a canvas, a GPU
//! scene builder, an SVG writer). Coordinates handed to path primitives
//! are in the space established by the preceding `set_transform` call,
//! and arc angles are in radians.

use inkplane_core::pen::{LineCap, LineJoin};
use kurbo::Affine;
use peniko::Color;

/// Path fill rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// A 2D immediate-mode drawing backend.
pub trait DrawSurface {
    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Set the stroke paint.
    fn set_stroke_paint(&mut self, paint: Color);
    /// Set the fill paint.
    fn set_fill_paint(&mut self, paint: Color);
    /// Set the stroke width.
    fn set_line_width(&mut self, width: f64);
    /// Set the line end cap style.
    fn set_line_cap(&mut self, cap: LineCap);
    /// Set the line join style.
    fn set_line_join(&mut self, join: LineJoin);
    /// Set the dash pattern; empty means solid.
    fn set_line_dashes(&mut self, dashes: &[f64]);
    /// Set the offset into the dash pattern.
    fn set_line_dash_offset(&mut self, offset: f64);

    /// Start a new path.
    fn begin_path(&mut self);
    /// Move the current point without drawing.
    fn move_to(&mut self, x: f64, y: f64);
    /// Straight segment to the given point.
    fn line_to(&mut self, x: f64, y: f64);
    /// Quadratic segment with one control point.
    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    /// Cubic segment with two control points.
    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    /// Center-form elliptical arc; all angles in radians.
    fn arc(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotate: f64, start: f64, extent: f64);
    /// Close the current subpath.
    fn close_path(&mut self);
    /// Stroke the current path.
    fn stroke(&mut self);
    /// Fill the current path.
    fn fill(&mut self, rule: FillRule);

    /// Stroke text at the given position with a resolved font size.
    fn draw_text(&mut self, x: f64, y: f64, size: f64, text: &str);
    /// Fill text at the given position with a resolved font size.
    fn fill_text(&mut self, x: f64, y: f64, size: f64, text: &str);
    /// Clear the given rectangle.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}
