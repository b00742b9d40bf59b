//! Path shape: an ordered sequence of drawing steps.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// One step in a path. Angles in arc steps are in degrees, matching the
/// shape API convention; replay converts to radians before handing the
/// step to the geometry kernel or the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathStep {
    /// Move the current point without drawing.
    Move(Point),
    /// Straight segment to the given point.
    Line(Point),
    /// Quadratic segment with one control point.
    Quad(Point, Point),
    /// Cubic segment with two control points.
    Curve(Point, Point, Point),
    /// Elliptical arc segment, in one of two parameterizations.
    Arc(ArcStep),
    /// Close the subpath back to the most recent move point.
    Close,
}

/// Arc step payload. The endpoint form must be converted to center form
/// (which needs the current point) before it can be drawn; the center
/// form can be drawn directly but leaves the current point at its
/// computed end point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArcStep {
    /// SVG-style endpoint arc: end point, radii, axis rotation in
    /// degrees, and the large-arc/sweep flags.
    Endpoint {
        end: Point,
        radii: Vec2,
        rotate: f64,
        large: bool,
        sweep: bool,
    },
    /// Center-form arc: center, radii, start angle and extent in degrees.
    Center {
        center: Point,
        radii: Vec2,
        start: f64,
        extent: f64,
    },
}

/// A path assembled from ordered steps.
///
/// Unlike the leaf shapes, a path is a mutable builder: steps are
/// appended through the methods below and read back at draw time. A new
/// path starts with an implicit move to its anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// The anchor point; also the rotation anchor.
    pub anchor: Point,
    /// Rotation in degrees about the anchor.
    pub rotate: f64,
    steps: Vec<PathStep>,
}

impl Path {
    /// Create a path anchored at the given point.
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_rotate(x, y, 0.0)
    }

    /// Create a path anchored at the given point with a rotation.
    pub fn with_rotate(x: f64, y: f64, rotate: f64) -> Self {
        let anchor = Point::new(x, y);
        Self {
            anchor,
            rotate,
            steps: vec![PathStep::Move(anchor)],
        }
    }

    /// Move the current point without drawing.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.steps.push(PathStep::Move(Point::new(x, y)));
        self
    }

    /// Draw a straight segment to the given point.
    pub fn line(&mut self, x: f64, y: f64) -> &mut Self {
        self.steps.push(PathStep::Line(Point::new(x, y)));
        self
    }

    /// Draw an endpoint-form arc to `(x, y)` with the given radii, axis
    /// rotation in degrees, and large-arc/sweep flags.
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        rx: f64,
        ry: f64,
        rotate: f64,
        large: bool,
        sweep: bool,
    ) -> &mut Self {
        self.steps.push(PathStep::Arc(ArcStep::Endpoint {
            end: Point::new(x, y),
            radii: Vec2::new(rx, ry),
            rotate,
            large,
            sweep,
        }));
        self
    }

    /// Draw a center-form arc with start angle and extent in degrees.
    pub fn arc_center(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        start: f64,
        extent: f64,
    ) -> &mut Self {
        self.steps.push(PathStep::Arc(ArcStep::Center {
            center: Point::new(cx, cy),
            radii: Vec2::new(rx, ry),
            start,
            extent,
        }));
        self
    }

    /// Draw a quadratic segment through one control point.
    pub fn quad(&mut self, bx: f64, by: f64, cx: f64, cy: f64) -> &mut Self {
        self.steps
            .push(PathStep::Quad(Point::new(bx, by), Point::new(cx, cy)));
        self
    }

    /// Draw a cubic segment through two control points.
    pub fn curve(&mut self, bx: f64, by: f64, cx: f64, cy: f64, dx: f64, dy: f64) -> &mut Self {
        self.steps.push(PathStep::Curve(
            Point::new(bx, by),
            Point::new(cx, cy),
            Point::new(dx, dy),
        ));
        self
    }

    /// Close the subpath back to the most recent move point.
    pub fn close(&mut self) -> &mut Self {
        self.steps.push(PathStep::Close);
        self
    }

    /// The recorded steps, in order.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_path_starts_with_move_to_anchor() {
        let path = Path::new(1.0, 2.0);
        assert_eq!(path.steps(), &[PathStep::Move(Point::new(1.0, 2.0))]);
    }

    #[test]
    fn test_steps_are_recorded_in_order() {
        let mut path = Path::new(0.0, 0.0);
        path.line(1.0, 0.0).quad(1.5, 0.5, 1.0, 1.0).close();
        assert_eq!(
            path.steps(),
            &[
                PathStep::Move(Point::ZERO),
                PathStep::Line(Point::new(1.0, 0.0)),
                PathStep::Quad(Point::new(1.5, 0.5), Point::new(1.0, 1.0)),
                PathStep::Close,
            ]
        );
    }

    #[test]
    fn test_both_arc_forms_are_step_producers() {
        let mut path = Path::new(0.0, 0.0);
        path.arc(2.0, 0.0, 1.0, 1.0, 0.0, false, true)
            .arc_center(3.0, 0.0, 1.0, 1.0, 180.0, -180.0);
        assert!(matches!(
            path.steps()[1],
            PathStep::Arc(ArcStep::Endpoint { .. })
        ));
        assert!(matches!(
            path.steps()[2],
            PathStep::Arc(ArcStep::Center { .. })
        ));
    }
}
