//! Drag-to-resize gesture engine.
//!
//! One [`ResizeController`] owns the lifecycle of a single corner-drag
//! gesture: pointer-down on a handle starts it, pointer moves emit clamped
//! size (or uniform-scale) updates, pointer-up ends it.

mod constraints;
mod controller;
mod handle;

pub use constraints::{ScaleConstraints, Size, SizeConstraints};
pub use controller::{Projection, ResizeController, ResizeUpdate, SCALE_SENSITIVITY};
pub use handle::{CursorHint, ResizeHandle};
