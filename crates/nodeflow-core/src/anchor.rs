//! Edge attachment anchors on node boundaries.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The side of a node an edge attaches to.
///
/// Every node exposes one anchor per side; the resolved position is the
/// midpoint of that side of the node's current bounds, so anchors follow
/// the node through moves and resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl AnchorSide {
    /// All four sides, in rendering order.
    pub const ALL: [AnchorSide; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Resolve the anchor position on a bounding rectangle.
    pub fn position(self, bounds: Rect) -> Point {
        match self {
            Self::Top => Point::new(bounds.center().x, bounds.y0),
            Self::Bottom => Point::new(bounds.center().x, bounds.y1),
            Self::Left => Point::new(bounds.x0, bounds.center().y),
            Self::Right => Point::new(bounds.x1, bounds.center().y),
        }
    }

    /// The side directly across the node.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_positions() {
        let bounds = Rect::new(10.0, 20.0, 110.0, 60.0);
        assert_eq!(AnchorSide::Top.position(bounds), Point::new(60.0, 20.0));
        assert_eq!(AnchorSide::Bottom.position(bounds), Point::new(60.0, 60.0));
        assert_eq!(AnchorSide::Left.position(bounds), Point::new(10.0, 40.0));
        assert_eq!(AnchorSide::Right.position(bounds), Point::new(110.0, 40.0));
    }

    #[test]
    fn test_opposite() {
        for side in AnchorSide::ALL {
            assert_eq!(side.opposite().opposite(), side);
        }
        assert_eq!(AnchorSide::Top.opposite(), AnchorSide::Bottom);
        assert_eq!(AnchorSide::Left.opposite(), AnchorSide::Right);
    }
}
