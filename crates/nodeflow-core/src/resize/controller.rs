//! Drag-to-resize gesture tracking.

use kurbo::{Point, Vec2};

use super::constraints::{ScaleConstraints, Size, SizeConstraints};
use super::handle::ResizeHandle;

/// Pointer-to-scale sensitivity: pixels of drag per 1.0 of scale change.
pub const SCALE_SENSITIVITY: f64 = 100.0;

/// How a gesture's pointer delta is projected into an output value.
///
/// The two resize variants (discrete width/height vs. uniform scale) share
/// the same gesture tracking; only this projection differs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Discrete width/height output.
    Size {
        start: Size,
        constraints: SizeConstraints,
    },
    /// Uniform scale-factor output.
    Scale {
        start: f64,
        constraints: ScaleConstraints,
    },
}

/// A clamped size or scale value emitted during an active gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeUpdate {
    Size(Size),
    Scale(f64),
}

/// State of one in-flight gesture.
#[derive(Debug, Clone)]
struct Gesture {
    start_pointer: Point,
    handle: ResizeHandle,
    projection: Projection,
}

/// Tracks a single drag-to-resize gesture for one node.
///
/// At most one gesture is active per controller: `begin` while active is
/// rejected and the original gesture continues untouched. The host event
/// loop delivers pointer events in order, so emitted updates preserve that
/// order and the last update before `end` reflects the final pointer
/// position. Controllers for different nodes never interact.
#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    gesture: Option<Gesture>,
}

impl ResizeController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently active.
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// The handle of the active gesture, if any.
    pub fn active_handle(&self) -> Option<ResizeHandle> {
        self.gesture.as_ref().map(|g| g.handle)
    }

    /// Start a gesture at a pointer position. Rejected (no-op) while a
    /// gesture is already active.
    pub fn begin(&mut self, pointer: Point, handle: ResizeHandle, projection: Projection) {
        if self.gesture.is_some() {
            log::trace!("resize begin ignored: gesture already active");
            return;
        }
        log::trace!("resize begin: {handle:?} at ({}, {})", pointer.x, pointer.y);
        self.gesture = Some(Gesture {
            start_pointer: pointer,
            handle,
            projection,
        });
    }

    /// Process a pointer move.
    ///
    /// Returns the clamped update while a gesture is active, `None`
    /// otherwise. An update is emitted on every move, including zero-delta
    /// moves that reproduce the start value.
    pub fn pointer_moved(&mut self, pointer: Point) -> Option<ResizeUpdate> {
        let gesture = self.gesture.as_ref()?;
        let delta = Vec2::new(
            pointer.x - gesture.start_pointer.x,
            pointer.y - gesture.start_pointer.y,
        );
        Some(project(gesture.handle, delta, gesture.projection))
    }

    /// End the gesture. Safe to call when none is active; returns whether
    /// one was.
    pub fn end(&mut self) -> bool {
        let was_active = self.gesture.take().is_some();
        if was_active {
            log::trace!("resize end");
        }
        was_active
    }
}

/// Apply a handle's axis signs to a pointer delta and project the result.
fn project(handle: ResizeHandle, delta: Vec2, projection: Projection) -> ResizeUpdate {
    match projection {
        Projection::Size { start, constraints } => {
            let width = match handle.sign_x() {
                Some(sign) => start.width + delta.x * sign,
                None => start.width,
            };
            let height = match handle.sign_y() {
                Some(sign) => start.height + delta.y * sign,
                None => start.height,
            };
            ResizeUpdate::Size(constraints.clamp(Size::new(width, height)))
        }
        Projection::Scale { start, constraints } => {
            let mut contribution = 0.0;
            let mut axes: f64 = 0.0;
            if let Some(sign) = handle.sign_x() {
                contribution += delta.x * sign;
                axes += 1.0;
            }
            if let Some(sign) = handle.sign_y() {
                contribution += delta.y * sign;
                axes += 1.0;
            }
            let scale = start + contribution / axes.max(1.0) / SCALE_SENSITIVITY;
            ResizeUpdate::Scale(constraints.clamp(scale))
        }
    }
}
