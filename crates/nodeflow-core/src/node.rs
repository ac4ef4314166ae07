//! Node records for the diagram.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resize::{Projection, ResizeUpdate, ScaleConstraints, Size, SizeConstraints};

/// Unique node identifier.
pub type NodeId = Uuid;

/// The geometric family of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Rectangle,
    /// Scaled uniformly around a fixed base footprint.
    Ellipse,
    /// Kept square; size updates collapse to the larger dimension.
    Circle,
    /// Kept square, like [`Self::Circle`].
    Diamond,
}

impl NodeKind {
    /// Sizing for a freshly dropped node of this kind.
    pub fn default_sizing(self) -> Sizing {
        match self {
            Self::Rectangle => Sizing::Fixed(Size::new(44.0, 28.0)),
            Self::Ellipse => Sizing::Scaled {
                base: Size::new(96.0, 64.0),
                scale: 1.0,
            },
            Self::Circle => Sizing::Fixed(Size::new(28.0, 28.0)),
            Self::Diamond => Sizing::Fixed(Size::new(32.0, 32.0)),
        }
    }

    /// Whether this kind keeps width and height equal.
    pub fn is_uniform(self) -> bool {
        matches!(self, Self::Circle | Self::Diamond)
    }

    /// Apply this kind's size policy to a requested size.
    pub fn constrain(self, size: Size) -> Size {
        if self.is_uniform() { size.uniform() } else { size }
    }
}

/// How a node's footprint is stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Sizing {
    /// Explicit width/height in pixels.
    Fixed(Size),
    /// A base footprint multiplied by a uniform factor.
    Scaled { base: Size, scale: f64 },
}

impl Sizing {
    /// The rendered size.
    pub fn size(&self) -> Size {
        match *self {
            Self::Fixed(size) => size,
            Self::Scaled { base, scale } => Size::new(base.width * scale, base.height * scale),
        }
    }
}

/// A diagram node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Top-left corner in world coordinates.
    pub position: Point,
    pub sizing: Sizing,
    pub label: String,
    /// Cleared while a resize gesture owns the node, so the host canvas
    /// does not interpret the drag as a node move or pan.
    pub draggable: bool,
}

impl Node {
    /// Create a node of the given kind at a position, with its kind's
    /// default sizing.
    pub fn new(kind: NodeKind, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            sizing: kind.default_sizing(),
            label: String::new(),
            draggable: true,
        }
    }

    /// The rendered size.
    pub fn size(&self) -> Size {
        self.sizing.size()
    }

    /// Bounding rectangle in world coordinates.
    pub fn bounds(&self) -> Rect {
        let size = self.size();
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + size.width,
            self.position.y + size.height,
        )
    }

    /// Move the node by a delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Apply a resize output through the kind's policy. Size updates on a
    /// scaled node (and vice versa) are ignored.
    pub fn apply_resize(&mut self, update: ResizeUpdate) {
        match (&mut self.sizing, update) {
            (Sizing::Fixed(size), ResizeUpdate::Size(new_size)) => {
                *size = self.kind.constrain(new_size);
            }
            (Sizing::Scaled { scale, .. }, ResizeUpdate::Scale(new_scale)) => {
                *scale = new_scale;
            }
            _ => {}
        }
    }

    /// The gesture projection for resizing this node, with the bounds
    /// profile its sizing uses.
    pub fn projection(&self) -> Projection {
        match self.sizing {
            Sizing::Fixed(size) => Projection::Size {
                start: size,
                constraints: SizeConstraints::default(),
            },
            Sizing::Scaled { scale, .. } => Projection::Scale {
                start: scale,
                constraints: ScaleConstraints::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizing() {
        let rect = Node::new(NodeKind::Rectangle, Point::ZERO);
        assert!((rect.size().width - 44.0).abs() < f64::EPSILON);
        assert!((rect.size().height - 28.0).abs() < f64::EPSILON);

        let circle = Node::new(NodeKind::Circle, Point::ZERO);
        assert!((circle.size().width - 28.0).abs() < f64::EPSILON);
        assert!((circle.size().height - 28.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scaled_size() {
        let mut ellipse = Node::new(NodeKind::Ellipse, Point::ZERO);
        ellipse.apply_resize(ResizeUpdate::Scale(1.5));
        assert!((ellipse.size().width - 144.0).abs() < f64::EPSILON);
        assert!((ellipse.size().height - 96.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uniform_policy_takes_larger_dimension() {
        let mut circle = Node::new(NodeKind::Circle, Point::ZERO);
        circle.apply_resize(ResizeUpdate::Size(Size::new(40.0, 30.0)));
        assert!((circle.size().width - 40.0).abs() < f64::EPSILON);
        assert!((circle.size().height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mismatched_update_is_ignored() {
        let mut ellipse = Node::new(NodeKind::Ellipse, Point::ZERO);
        let before = ellipse.size();
        ellipse.apply_resize(ResizeUpdate::Size(Size::new(10.0, 10.0)));
        assert_eq!(ellipse.size(), before);

        let mut rect = Node::new(NodeKind::Rectangle, Point::ZERO);
        let before = rect.size();
        rect.apply_resize(ResizeUpdate::Scale(2.0));
        assert_eq!(rect.size(), before);
    }

    #[test]
    fn test_bounds() {
        let node = Node::new(NodeKind::Rectangle, Point::new(10.0, 20.0));
        let bounds = node.bounds();
        assert_eq!(bounds, Rect::new(10.0, 20.0, 54.0, 48.0));
    }

    #[test]
    fn test_translate() {
        let mut node = Node::new(NodeKind::Rectangle, Point::new(10.0, 20.0));
        node.translate(Vec2::new(5.0, -5.0));
        assert_eq!(node.position, Point::new(15.0, 15.0));
    }

    #[test]
    fn test_projection_matches_sizing() {
        let rect = Node::new(NodeKind::Rectangle, Point::ZERO);
        assert!(matches!(rect.projection(), Projection::Size { .. }));

        let ellipse = Node::new(NodeKind::Ellipse, Point::ZERO);
        assert!(matches!(ellipse.projection(), Projection::Scale { .. }));
    }
}
