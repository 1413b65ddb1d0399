//! Resolve module - turns the intermediate target into the displayed image.
//!
//! Multisampled targets are resolved in hardware first; every mode then
//! blits the destination surface onto the output with a full-screen quad.

mod quad;
mod resolve_stage;

pub use quad::{QuadVertex, QuadConstants, BlitOrientation, QUAD_VERTICES};
pub use resolve_stage::ResolveStage;
