//! NodeFlow Core Library
//!
//! Platform-agnostic data structures and interactive geometry for the
//! NodeFlow diagram editor: the node/edge document, the drag-to-resize
//! gesture engine, and the stateless edge router. The view layer (canvas
//! rendering, toolbars, export) is a thin consumer of this crate.

pub mod anchor;
pub mod graph;
pub mod interaction;
pub mod node;
pub mod resize;
pub mod routing;
pub mod snap;
pub mod style;

pub use anchor::AnchorSide;
pub use graph::{Diagram, Edge, EdgeEnd, EdgeId, GraphError};
pub use interaction::{Interaction, ResizeNotification};
pub use node::{Node, NodeId, NodeKind, Sizing};
pub use resize::{
    CursorHint, Projection, ResizeController, ResizeHandle, ResizeUpdate, ScaleConstraints, Size,
    SizeConstraints,
};
pub use routing::{route, EdgePath, EdgeStyleKind, HIT_REGION_WIDTH};
pub use snap::{snap_to_grid, SnapResult, GRID_SIZE};
pub use style::{ArrowMarker, EdgeDecoration, Rgba};
