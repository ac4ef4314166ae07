//! Resize handle definitions.

use serde::{Deserialize, Serialize};

/// A resize handle position on a node's bounding box.
///
/// Corner handles affect both axes; edge handles affect one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// Horizontal sign convention: handles on the left side shrink width
    /// when dragged right, handles on the right side grow it. `None` when
    /// the handle leaves width untouched.
    pub fn sign_x(self) -> Option<f64> {
        match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => Some(-1.0),
            Self::Right | Self::TopRight | Self::BottomRight => Some(1.0),
            Self::Top | Self::Bottom => None,
        }
    }

    /// Vertical sign convention, mirroring [`Self::sign_x`].
    pub fn sign_y(self) -> Option<f64> {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(-1.0),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(1.0),
            Self::Left | Self::Right => None,
        }
    }

    /// Whether this handle affects both axes.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    /// The cursor shown while this handle's gesture is active.
    pub fn cursor_hint(self) -> CursorHint {
        match self {
            Self::TopLeft | Self::BottomRight => CursorHint::DiagonalNwse,
            Self::TopRight | Self::BottomLeft => CursorHint::DiagonalNesw,
            Self::Top | Self::Bottom => CursorHint::Vertical,
            Self::Left | Self::Right => CursorHint::Horizontal,
        }
    }
}

/// Global cursor override while a resize gesture is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorHint {
    /// Top-left / bottom-right diagonal (`nwse-resize`).
    DiagonalNwse,
    /// Top-right / bottom-left diagonal (`nesw-resize`).
    DiagonalNesw,
    /// Top / bottom (`ns-resize`).
    Vertical,
    /// Left / right (`ew-resize`).
    Horizontal,
}
