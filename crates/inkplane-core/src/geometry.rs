//! Arc re-parameterization helpers.
//!
//! Paths can describe elliptical arcs in two forms: the endpoint form
//! (SVG-style, with large-arc and sweep flags) and the center form that
//! drawing backends consume. These functions convert between the two and
//! recover the endpoints of a center-form arc so path replay can keep
//! track of the current point. All angles here are in radians; degrees
//! only appear at the shape API boundary.

use std::f64::consts::TAU;

use kurbo::{Point, Vec2};
use thiserror::Error;

/// Errors from arc parameter conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Zero radius or coincident endpoints. The arc has no center
    /// parameterization; callers draw a straight segment instead.
    #[error("degenerate arc parameters")]
    DegenerateArc,
}

/// An endpoint-form elliptical arc: from the current point to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointArc {
    /// The arc end point.
    pub end: Point,
    /// The ellipse radii.
    pub radii: Vec2,
    /// Rotation of the ellipse axes in radians.
    pub rotate: f64,
    /// Choose the larger of the two candidate arcs.
    pub large: bool,
    /// Sweep in the positive angular direction.
    pub sweep: bool,
}

/// A center-form elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    /// The ellipse center.
    pub center: Point,
    /// The ellipse radii.
    pub radii: Vec2,
    /// Rotation of the ellipse axes in radians.
    pub rotate: f64,
    /// Start angle in radians.
    pub start: f64,
    /// Angular extent in radians, signed by sweep direction.
    pub extent: f64,
}

/// Convert an endpoint-form arc to its center parameterization.
///
/// Implements the SVG endpoint-to-center conversion (W3C F.6.5),
/// including the radius inflation applied when the stated radii cannot
/// reach from `prior` to the end point (F.6.6).
pub fn arc_endpoint_to_center(prior: Point, arc: &EndpointArc) -> Result<CenterArc, GeometryError> {
    let mut rx = arc.radii.x.abs();
    let mut ry = arc.radii.y.abs();
    if rx == 0.0 || ry == 0.0 || prior == arc.end {
        return Err(GeometryError::DegenerateArc);
    }

    let (sin_phi, cos_phi) = arc.rotate.sin_cos();

    // Midpoint of the chord, expressed in the ellipse frame
    let dx = (prior.x - arc.end.x) / 2.0;
    let dy = (prior.y - arc.end.y) / 2.0;
    let x1p = cos_phi * dx + sin_phi * dy;
    let y1p = -sin_phi * dx + cos_phi * dy;

    // Inflate radii that cannot span the chord
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    // Center in the ellipse frame
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
    let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
    let mut coef = (num / den).max(0.0).sqrt();
    if arc.large == arc.sweep {
        coef = -coef;
    }
    let cxp = coef * rx * y1p / ry;
    let cyp = -coef * ry * x1p / rx;

    // Center back in the caller frame
    let cx = cos_phi * cxp - sin_phi * cyp + (prior.x + arc.end.x) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (prior.y + arc.end.y) / 2.0;

    // Start angle and signed extent
    let ux = (x1p - cxp) / rx;
    let uy = (y1p - cyp) / ry;
    let vx = (-x1p - cxp) / rx;
    let vy = (-y1p - cyp) / ry;

    let start = vector_angle(1.0, 0.0, ux, uy);
    let mut extent = vector_angle(ux, uy, vx, vy) % TAU;
    if !arc.sweep && extent > 0.0 {
        extent -= TAU;
    }
    if arc.sweep && extent < 0.0 {
        extent += TAU;
    }

    Ok(CenterArc {
        center: Point::new(cx, cy),
        radii: Vec2::new(rx, ry),
        rotate: arc.rotate,
        start,
        extent,
    })
}

/// The start and end points of a center-form arc.
pub fn arc_end_points(arc: &CenterArc) -> (Point, Point) {
    (arc_point(arc, arc.start), arc_point(arc, arc.start + arc.extent))
}

/// The point on a center-form arc at the given parametric angle.
pub fn arc_point(arc: &CenterArc, angle: f64) -> Point {
    let (sin_phi, cos_phi) = arc.rotate.sin_cos();
    let x = arc.radii.x * angle.cos();
    let y = arc.radii.y * angle.sin();
    Point::new(
        arc.center.x + cos_phi * x - sin_phi * y,
        arc.center.y + sin_phi * x + cos_phi * y,
    )
}

/// Signed angle from vector u to vector v.
fn vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let dot = ux * vx + uy * vy;
    let len = (ux * ux + uy * uy).sqrt() * (vx * vx + vy * vy).sqrt();
    let mut angle = (dot / len).clamp(-1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 {
        angle = -angle;
    }
    angle
}
