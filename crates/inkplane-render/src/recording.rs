//! A recording backend that logs every surface call.
//!
//! Useful for tests and headless verification: the recorded command list
//! is the exact primitive sequence a pixel backend would execute.

use inkplane_core::pen::{LineCap, LineJoin};
use kurbo::Affine;
use peniko::Color;

use crate::surface::{DrawSurface, FillRule};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetTransform(Affine),
    SetStrokePaint(Color),
    SetFillPaint(Color),
    SetLineWidth(f64),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
    SetLineDashes(Vec<f64>),
    SetLineDashOffset(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadTo(f64, f64, f64, f64),
    CubicTo(f64, f64, f64, f64, f64, f64),
    Arc {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotate: f64,
        start: f64,
        extent: f64,
    },
    ClosePath,
    Stroke,
    Fill(FillRule),
    DrawText {
        x: f64,
        y: f64,
        size: f64,
        text: String,
    },
    FillText {
        x: f64,
        y: f64,
        size: f64,
        text: String,
    },
    ClearRect(f64, f64, f64, f64),
}

/// A surface that records calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<Command>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in call order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.commands.push(Command::SetTransform(transform));
    }

    fn set_stroke_paint(&mut self, paint: Color) {
        self.commands.push(Command::SetStrokePaint(paint));
    }

    fn set_fill_paint(&mut self, paint: Color) {
        self.commands.push(Command::SetFillPaint(paint));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(Command::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.commands.push(Command::SetLineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.commands.push(Command::SetLineJoin(join));
    }

    fn set_line_dashes(&mut self, dashes: &[f64]) {
        self.commands.push(Command::SetLineDashes(dashes.to_vec()));
    }

    fn set_line_dash_offset(&mut self, offset: f64) {
        self.commands.push(Command::SetLineDashOffset(offset));
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::LineTo(x, y));
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.commands.push(Command::QuadTo(cx, cy, x, y));
    }

    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.commands.push(Command::CubicTo(c1x, c1y, c2x, c2y, x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotate: f64, start: f64, extent: f64) {
        self.commands.push(Command::Arc {
            cx,
            cy,
            rx,
            ry,
            rotate,
            start,
            extent,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }

    fn fill(&mut self, rule: FillRule) {
        self.commands.push(Command::Fill(rule));
    }

    fn draw_text(&mut self, x: f64, y: f64, size: f64, text: &str) {
        self.commands.push(Command::DrawText {
            x,
            y,
            size,
            text: text.to_owned(),
        });
    }

    fn fill_text(&mut self, x: f64, y: f64, size: f64, text: &str) {
        self.commands.push(Command::FillText {
            x,
            y,
            size,
            text: text.to_owned(),
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Command::ClearRect(x, y, width, height));
    }
}
