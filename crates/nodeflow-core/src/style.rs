//! Presentation attributes the host attaches to rendered edges.
//!
//! The router produces geometry only; dash pattern, stroke width, color,
//! and the arrowhead marker live here as plain data for the host renderer.

use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::routing::EdgeStyleKind;

/// Serializable RGBA8 color bridging to [`peniko::Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The default edge stroke, a muted gray.
    pub const fn stroke_gray() -> Self {
        Self::new(107, 114, 128, 255)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

/// Closed arrowhead marker dimensions at the edge's target end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowMarker {
    pub width: f64,
    pub height: f64,
}

impl Default for ArrowMarker {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 5.0,
        }
    }
}

/// Stroke presentation for a rendered edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeDecoration {
    pub stroke_width: f64,
    pub color: Rgba,
    /// Dash/gap lengths; `None` for a solid stroke.
    pub dash: Option<[f64; 2]>,
    pub marker: ArrowMarker,
}

impl EdgeDecoration {
    /// The decoration for an edge style family.
    pub fn for_kind(kind: EdgeStyleKind) -> Self {
        Self {
            stroke_width: 0.75,
            color: Rgba::stroke_gray(),
            dash: match kind {
                EdgeStyleKind::Dashed => Some([5.0, 3.0]),
                _ => None,
            },
            marker: ArrowMarker::default(),
        }
    }
}
