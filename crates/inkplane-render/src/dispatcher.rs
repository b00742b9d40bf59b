//! Maps shapes and pens to primitive surface calls.

use std::f64::consts::TAU;

use inkplane_core::geometry::{self, CenterArc, EndpointArc};
use inkplane_core::pen::Pen;
use inkplane_core::shapes::{Arc, ArcStep, Curve, Ellipse, Line, Path, PathStep, Quad, Shape, Text};
use inkplane_core::viewport::{TEXT_SCALE, Viewport};
use kurbo::{Affine, Point};
use log::trace;

use crate::surface::{DrawSurface, FillRule};

/// Issues primitive calls for shapes against a [`DrawSurface`].
///
/// Every call takes the viewport, the shape, and the pen explicitly; no
/// style or transform state is retained between calls. The dispatcher
/// composes the viewport's world transform with the shape's own rotation
/// about its anchor before any primitive is issued.
#[derive(Debug)]
pub struct DrawDispatcher<S> {
    surface: S,
}

impl<S: DrawSurface> DrawDispatcher<S> {
    /// Wrap a surface.
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// The wrapped surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The wrapped surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Unwrap the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Clear the whole surface.
    pub fn clear(&mut self, viewport: &Viewport) {
        let size = viewport.size();
        self.surface.set_transform(Affine::IDENTITY);
        self.surface.clear_rect(0.0, 0.0, size.width, size.height);
    }

    /// Stroke a shape.
    pub fn draw(&mut self, viewport: &Viewport, shape: &Shape, pen: &Pen) {
        trace!("draw {:?}", shape.shape_type());
        match shape {
            Shape::Line(line) => self.draw_line(viewport, line, pen),
            Shape::Arc(arc) => self.draw_arc(viewport, arc, pen),
            Shape::Ellipse(ellipse) => self.draw_ellipse(viewport, ellipse, pen),
            Shape::Quad(quad) => self.draw_quad(viewport, quad, pen),
            Shape::Curve(curve) => self.draw_curve(viewport, curve, pen),
            Shape::Text(text) => self.draw_text(viewport, text, pen),
            Shape::Path(path) => self.draw_path(viewport, path, pen),
        }
    }

    /// Fill a shape. Only ellipses, text, and paths support filling;
    /// every other variant is a silent no-op, preserved for
    /// compatibility with existing drawings.
    pub fn fill(&mut self, viewport: &Viewport, shape: &Shape, pen: &Pen) {
        trace!("fill {:?}", shape.shape_type());
        match shape {
            Shape::Ellipse(ellipse) => self.fill_ellipse(viewport, ellipse, pen),
            Shape::Text(text) => self.fill_text(viewport, text, pen),
            Shape::Path(path) => self.fill_path(viewport, path, pen),
            Shape::Line(_) | Shape::Arc(_) | Shape::Quad(_) | Shape::Curve(_) => {}
        }
    }

    /// Draw a full-width horizontal guide line directly in screen space.
    pub fn draw_hrule(&mut self, viewport: &Viewport, position: f64, pen: &Pen) {
        self.surface.set_transform(Affine::IDENTITY);
        self.surface.set_stroke_paint(pen.paint);
        self.surface.set_line_width(pen.width);
        self.surface.begin_path();
        self.surface.move_to(0.0, position);
        self.surface.line_to(viewport.size().width, position);
        self.surface.stroke();
    }

    /// Draw a full-height vertical guide line directly in screen space.
    pub fn draw_vrule(&mut self, viewport: &Viewport, position: f64, pen: &Pen) {
        self.surface.set_transform(Affine::IDENTITY);
        self.surface.set_stroke_paint(pen.paint);
        self.surface.set_line_width(pen.width);
        self.surface.begin_path();
        self.surface.move_to(position, 0.0);
        self.surface.line_to(position, viewport.size().height);
        self.surface.stroke();
    }

    fn draw_line(&mut self, viewport: &Viewport, line: &Line, pen: &Pen) {
        self.apply_pen(pen, false);
        self.shape_setup(viewport, line.start, line.rotate);
        self.surface.begin_path();
        self.surface.move_to(line.start.x, line.start.y);
        self.surface.line_to(line.end.x, line.end.y);
        self.surface.stroke();
    }

    fn draw_arc(&mut self, viewport: &Viewport, arc: &Arc, pen: &Pen) {
        self.apply_pen(pen, false);
        self.shape_setup(viewport, arc.center, arc.rotate);
        self.surface.begin_path();
        self.surface.arc(
            arc.center.x,
            arc.center.y,
            arc.radii.x,
            arc.radii.y,
            0.0,
            arc.start.to_radians(),
            arc.extent.to_radians(),
        );
        self.surface.stroke();
    }

    fn draw_ellipse(&mut self, viewport: &Viewport, ellipse: &Ellipse, pen: &Pen) {
        self.apply_pen(pen, false);
        self.shape_setup(viewport, ellipse.center, ellipse.rotate);
        self.ellipse_path(ellipse);
        self.surface.stroke();
    }

    fn fill_ellipse(&mut self, viewport: &Viewport, ellipse: &Ellipse, pen: &Pen) {
        self.apply_pen(pen, false);
        self.shape_setup(viewport, ellipse.center, ellipse.rotate);
        self.ellipse_path(ellipse);
        self.surface.fill(FillRule::NonZero);
    }

    fn ellipse_path(&mut self, ellipse: &Ellipse) {
        self.surface.begin_path();
        self.surface.arc(
            ellipse.center.x,
            ellipse.center.y,
            ellipse.radii.x,
            ellipse.radii.y,
            0.0,
            0.0,
            TAU,
        );
    }

    fn draw_quad(&mut self, viewport: &Viewport, quad: &Quad, pen: &Pen) {
        self.apply_pen(pen, false);
        self.shape_setup(viewport, quad.start, quad.rotate);
        self.surface.begin_path();
        self.surface.move_to(quad.start.x, quad.start.y);
        self.surface
            .quad_to(quad.control.x, quad.control.y, quad.end.x, quad.end.y);
        self.surface.stroke();
    }

    fn draw_curve(&mut self, viewport: &Viewport, curve: &Curve, pen: &Pen) {
        self.apply_pen(pen, false);
        self.shape_setup(viewport, curve.start, curve.rotate);
        self.surface.begin_path();
        self.surface.move_to(curve.start.x, curve.start.y);
        self.surface.cubic_to(
            curve.control1.x,
            curve.control1.y,
            curve.control2.x,
            curve.control2.y,
            curve.end.x,
            curve.end.y,
        );
        self.surface.stroke();
    }

    fn draw_path(&mut self, viewport: &Viewport, path: &Path, pen: &Pen) {
        self.apply_pen(pen, false);
        self.shape_setup(viewport, path.anchor, path.rotate);
        self.surface.begin_path();
        self.replay(path.steps());
        self.surface.stroke();
    }

    fn fill_path(&mut self, viewport: &Viewport, path: &Path, pen: &Pen) {
        self.apply_pen(pen, false);
        self.shape_setup(viewport, path.anchor, path.rotate);
        self.surface.begin_path();
        self.replay(path.steps());
        self.surface.fill(FillRule::EvenOdd);
    }

    fn draw_text(&mut self, viewport: &Viewport, text: &Text, pen: &Pen) {
        self.apply_pen(pen, true);
        let anchor = self.text_setup(viewport, text);
        self.surface
            .draw_text(anchor.x, anchor.y, text.height * TEXT_SCALE, &text.text);
    }

    fn fill_text(&mut self, viewport: &Viewport, text: &Text, pen: &Pen) {
        self.apply_pen(pen, true);
        let anchor = self.text_setup(viewport, text);
        self.surface
            .fill_text(anchor.x, anchor.y, text.height * TEXT_SCALE, &text.text);
    }

    /// Push pen attributes to the surface. Text geometry is pre-scaled
    /// by [`TEXT_SCALE`], so the pen's width, dashes, and offset are
    /// scaled up with it to keep the stroke visually consistent.
    fn apply_pen(&mut self, pen: &Pen, text: bool) {
        let scale = if text { TEXT_SCALE } else { 1.0 };
        self.surface.set_stroke_paint(pen.paint);
        self.surface.set_fill_paint(pen.paint);
        self.surface.set_line_width(pen.width * scale);
        self.surface.set_line_cap(pen.cap);
        self.surface.set_line_join(pen.join);
        if pen.dashes.is_empty() {
            self.surface.set_line_dashes(&[]);
        } else {
            let dashes: Vec<f64> = pen.dashes.iter().map(|dash| dash * scale).collect();
            self.surface.set_line_dashes(&dashes);
        }
        self.surface.set_line_dash_offset(pen.offset * scale);
    }

    /// Set the surface transform to the world transform composed with
    /// the shape's own rotation about its anchor.
    fn shape_setup(&mut self, viewport: &Viewport, anchor: Point, rotate: f64) {
        let transform = viewport.world_transform() * Affine::rotate_about(rotate.to_radians(), anchor);
        self.surface.set_transform(transform);
    }

    /// Set the text transform, rotated about the pre-scaled anchor, and
    /// return that anchor. The text transform's Y convention matches the
    /// text backend, so the rotation sign and anchor Y are negated
    /// relative to the shape transform.
    fn text_setup(&mut self, viewport: &Viewport, text: &Text) -> Point {
        let anchor = Point::new(text.anchor.x * TEXT_SCALE, -text.anchor.y * TEXT_SCALE);
        let transform = viewport.text_transform()
            * Affine::rotate_about((-text.rotate).to_radians(), anchor);
        self.surface.set_transform(transform);
        anchor
    }

    /// Execute path steps in order, tracking the current point.
    ///
    /// The current point feeds the endpoint-to-center arc conversion,
    /// and `Close` returns it to the most recent move point. A
    /// degenerate endpoint arc falls back to a straight segment.
    fn replay(&mut self, steps: &[PathStep]) {
        let mut subpath_start = Point::ZERO;
        let mut prior = Point::ZERO;
        for step in steps {
            match *step {
                PathStep::Move(point) => {
                    self.surface.move_to(point.x, point.y);
                    prior = point;
                    subpath_start = point;
                }
                PathStep::Line(point) => {
                    self.surface.line_to(point.x, point.y);
                    prior = point;
                }
                PathStep::Quad(control, point) => {
                    self.surface.quad_to(control.x, control.y, point.x, point.y);
                    prior = point;
                }
                PathStep::Curve(control1, control2, point) => {
                    self.surface.cubic_to(
                        control1.x, control1.y, control2.x, control2.y, point.x, point.y,
                    );
                    prior = point;
                }
                PathStep::Arc(ArcStep::Endpoint {
                    end,
                    radii,
                    rotate,
                    large,
                    sweep,
                }) => {
                    let endpoint = EndpointArc {
                        end,
                        radii,
                        rotate: rotate.to_radians(),
                        large,
                        sweep,
                    };
                    match geometry::arc_endpoint_to_center(prior, &endpoint) {
                        Ok(arc) => self.surface.arc(
                            arc.center.x,
                            arc.center.y,
                            arc.radii.x,
                            arc.radii.y,
                            arc.rotate,
                            arc.start,
                            arc.extent,
                        ),
                        // Degenerate arcs collapse to a straight segment
                        Err(_) => self.surface.line_to(end.x, end.y),
                    }
                    prior = end;
                }
                PathStep::Arc(ArcStep::Center {
                    center,
                    radii,
                    start,
                    extent,
                }) => {
                    let arc = CenterArc {
                        center,
                        radii,
                        rotate: 0.0,
                        start: start.to_radians(),
                        extent: extent.to_radians(),
                    };
                    self.surface.arc(
                        arc.center.x,
                        arc.center.y,
                        arc.radii.x,
                        arc.radii.y,
                        arc.rotate,
                        arc.start,
                        arc.extent,
                    );
                    prior = geometry::arc_end_points(&arc).1;
                }
                PathStep::Close => {
                    self.surface.close_path();
                    prior = subpath_start;
                }
            }
        }
    }
}
