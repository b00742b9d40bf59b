//! Inkplane core library
//!
//! A retained-parameter 2D vector drawing surface: callers describe
//! shapes in a resolution-independent world coordinate space (physical
//! length units, pan, zoom, rotation) and the viewport converts them to
//! screen pixels. This crate holds the transform engine, the shape and
//! pen model, and the pointer-driven pan/zoom controller; issuing the
//! actual primitive draw calls lives in `inkplane-render`.

pub mod geometry;
pub mod input;
pub mod pen;
pub mod shapes;
pub mod units;
pub mod viewport;

pub use input::{PanZoomController, PointerEvent};
pub use pen::{LineCap, LineJoin, Pen};
pub use shapes::{Shape, ShapeType};
pub use units::LengthUnit;
pub use viewport::{TEXT_SCALE, Viewport, ViewportUpdate};
