//! Inkplane render library
//!
//! Turns `inkplane-core` shapes into primitive backend calls. The
//! [`DrawSurface`] trait is the backend contract, [`DrawDispatcher`]
//! resolves shapes and pens against a viewport and issues the calls, and
//! [`RecordingSurface`] captures the call stream for tests and headless
//! use.

pub mod dispatcher;
pub mod recording;
pub mod surface;

pub use dispatcher::DrawDispatcher;
pub use recording::{Command, RecordingSurface};
pub use surface::{DrawSurface, FillRule};
