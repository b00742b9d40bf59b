//! Pointer-driven pan and zoom.

use kurbo::{Point, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::viewport::Viewport;

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer pressed.
    Down { position: Point },
    /// Pointer moved.
    Move { position: Point },
    /// Pointer released.
    Up { position: Point },
    /// Scroll wheel; only the vertical delta component drives zoom.
    Scroll { position: Point, delta: Vec2 },
}

/// Captured state of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    /// Screen position at press.
    anchor: Point,
    /// Viewpoint at press.
    viewpoint: Point,
}

/// Converts pointer drags into viewpoint changes and scroll steps into
/// zoom changes about the cursor.
///
/// The controller is a two-state machine, idle or dragging; zooming is
/// stateless per scroll event. It mutates the viewport only through its
/// public setters and never touches the transform matrices directly.
#[derive(Debug, Clone, Default)]
pub struct PanZoomController {
    drag: Option<DragState>,
}

impl PanZoomController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Feed one pointer event into the controller.
    pub fn handle(&mut self, viewport: &mut Viewport, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.begin_drag(viewport, position),
            PointerEvent::Move { position } => self.drag_to(viewport, position),
            PointerEvent::Up { position } => {
                self.drag_to(viewport, position);
                self.drag = None;
            }
            PointerEvent::Scroll { position, delta } => self.scroll(viewport, position, delta.y),
        }
    }

    fn begin_drag(&mut self, viewport: &Viewport, position: Point) {
        debug!("drag begin at {position:?}");
        self.drag = Some(DragState {
            anchor: position,
            viewpoint: viewport.viewpoint(),
        });
    }

    fn drag_to(&mut self, viewport: &mut Viewport, position: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let unit = viewport.unit();
        let dpi = viewport.dpi();
        let zoom = viewport.zoom();
        let dx = (position.x - drag.anchor.x) / unit.convert(dpi.x * zoom.x);
        let dy = (position.y - drag.anchor.y) / unit.convert(dpi.y * zoom.y);
        // Absolute offset from the captured start viewpoint, so a long
        // drag cannot accumulate drift. Screen Y is inverted relative to
        // world Y, hence the sign split.
        viewport.set_viewpoint(Point::new(drag.viewpoint.x - dx, drag.viewpoint.y + dy));
    }

    fn scroll(&mut self, viewport: &mut Viewport, position: Point, delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let step = 1.0 + viewport.zoom_step();
        let factor = if delta_y < 0.0 { 1.0 / step } else { step };
        let zoom = viewport.zoom() * factor;
        // The pointer position goes through the pre-zoom inverse; with a
        // degenerate transform the whole event is skipped.
        let Some(world) = viewport.screen_to_world(position) else {
            return;
        };
        debug!("zoom {factor} about {world:?}");
        viewport.set_zoom_at(world, zoom);
    }
}
