//! Host-facing interaction state: selection, hover, and the active resize
//! gesture.
//!
//! The host event loop reports pointer events here. While a resize gesture
//! is active they are forwarded to the one owning controller, so exactly
//! one listener path exists, begin/end teardown stays symmetric, and the
//! gesture registration cannot leak.

use kurbo::Point;

use crate::graph::{Diagram, EdgeId};
use crate::node::NodeId;
use crate::resize::{CursorHint, ResizeController, ResizeHandle, ResizeUpdate};

/// A resize notification for the host's entity store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeNotification {
    pub node: NodeId,
    /// The raw projection output (size or scale).
    pub update: ResizeUpdate,
}

/// Interaction state for one canvas.
///
/// At most one node and one edge are selected at a time; selecting one
/// kind clears the other, matching click semantics on the canvas.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    selected_node: Option<NodeId>,
    selected_edge: Option<EdgeId>,
    hovered_node: Option<NodeId>,
    resize: ResizeController,
    /// Node owned by the active resize gesture.
    resizing: Option<NodeId>,
    cursor: Option<CursorHint>,
}

impl Interaction {
    /// Create an idle interaction state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a node, clearing any edge selection.
    pub fn select_node(&mut self, id: NodeId) {
        self.selected_node = Some(id);
        self.selected_edge = None;
    }

    /// Select an edge, clearing any node selection.
    pub fn select_edge(&mut self, id: EdgeId) {
        self.selected_edge = Some(id);
        self.selected_node = None;
    }

    /// The selected node, if any.
    pub fn selected_node(&self) -> Option<NodeId> {
        self.selected_node
    }

    /// The selected edge, if any.
    pub fn selected_edge(&self) -> Option<EdgeId> {
        self.selected_edge
    }

    /// Set or clear the hovered node.
    pub fn set_hovered(&mut self, id: Option<NodeId>) {
        self.hovered_node = id;
    }

    /// The hovered node, if any.
    pub fn hovered_node(&self) -> Option<NodeId> {
        self.hovered_node
    }

    /// Clear node and edge selection (pane click).
    pub fn clear_selection(&mut self) {
        self.selected_node = None;
        self.selected_edge = None;
    }

    /// Drop any state referring to a removed node.
    pub fn forget_node(&mut self, id: NodeId) {
        if self.selected_node == Some(id) {
            self.selected_node = None;
        }
        if self.hovered_node == Some(id) {
            self.hovered_node = None;
        }
    }

    /// Drop any state referring to a removed edge.
    pub fn forget_edge(&mut self, id: EdgeId) {
        if self.selected_edge == Some(id) {
            self.selected_edge = None;
        }
    }

    /// The global cursor override while a gesture is active.
    pub fn cursor_hint(&self) -> Option<CursorHint> {
        self.cursor
    }

    /// Whether a resize gesture is active.
    pub fn is_resizing(&self) -> bool {
        self.resize.is_active()
    }

    /// Begin a resize gesture on a node's handle.
    ///
    /// No-op while another gesture is active, and when the node is not in
    /// the diagram. Marks the node non-draggable for the duration.
    pub fn begin_resize(
        &mut self,
        diagram: &mut Diagram,
        id: NodeId,
        handle: ResizeHandle,
        pointer: Point,
    ) {
        if self.resize.is_active() {
            log::trace!("begin_resize ignored: a gesture is already active");
            return;
        }
        let Some(node) = diagram.node_mut(id) else {
            return;
        };
        let projection = node.projection();
        node.draggable = false;
        self.resize.begin(pointer, handle, projection);
        self.resizing = Some(id);
        self.cursor = Some(handle.cursor_hint());
    }

    /// Forward a pointer move to the active gesture and persist the result
    /// into the diagram.
    ///
    /// Returns the notification for the host's store, `None` when no
    /// gesture is active.
    pub fn pointer_moved(
        &mut self,
        diagram: &mut Diagram,
        pointer: Point,
    ) -> Option<ResizeNotification> {
        let node = self.resizing?;
        let update = self.resize.pointer_moved(pointer)?;
        diagram.apply_resize(node, update).ok()?;
        Some(ResizeNotification { node, update })
    }

    /// End the active gesture, restoring the node's drag capability and
    /// clearing the cursor override. Idempotent.
    pub fn end_resize(&mut self, diagram: &mut Diagram) -> bool {
        let was_active = self.resize.end();
        if let Some(id) = self.resizing.take() {
            if let Some(node) = diagram.node_mut(id) {
                node.draggable = true;
            }
        }
        self.cursor = None;
        was_active
    }

    /// Teardown path for focus loss or window blur; identical to
    /// [`Self::end_resize`].
    pub fn cancel(&mut self, diagram: &mut Diagram) -> bool {
        self.end_resize(diagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorSide;
    use crate::graph::EdgeEnd;
    use crate::node::NodeKind;
    use crate::resize::Size;
    use crate::routing::EdgeStyleKind;

    fn diagram_with_rect() -> (Diagram, NodeId) {
        let mut diagram = Diagram::new();
        let id = diagram.add_node(NodeKind::Rectangle, Point::ZERO);
        (diagram, id)
    }

    #[test]
    fn test_resize_gesture_lifecycle() {
        let (mut diagram, id) = diagram_with_rect();
        let mut interaction = Interaction::new();

        interaction.begin_resize(&mut diagram, id, ResizeHandle::BottomRight, Point::ZERO);
        assert!(interaction.is_resizing());
        assert!(!diagram.node(id).unwrap().draggable);
        assert_eq!(interaction.cursor_hint(), Some(CursorHint::DiagonalNwse));

        let note = interaction
            .pointer_moved(&mut diagram, Point::new(20.0, 10.0))
            .unwrap();
        assert_eq!(note.node, id);
        // Rectangle default is 44x28.
        assert_eq!(diagram.node(id).unwrap().size(), Size::new(64.0, 38.0));

        assert!(interaction.end_resize(&mut diagram));
        assert!(diagram.node(id).unwrap().draggable);
        assert!(interaction.cursor_hint().is_none());
        assert!(!interaction.is_resizing());
    }

    #[test]
    fn test_second_begin_is_rejected() {
        let (mut diagram, a) = diagram_with_rect();
        let b = diagram.add_node(NodeKind::Rectangle, Point::new(200.0, 0.0));
        let mut interaction = Interaction::new();

        interaction.begin_resize(&mut diagram, a, ResizeHandle::BottomRight, Point::ZERO);
        interaction.begin_resize(&mut diagram, b, ResizeHandle::TopLeft, Point::ZERO);

        // The second node was never claimed by the gesture.
        assert!(diagram.node(b).unwrap().draggable);

        let note = interaction
            .pointer_moved(&mut diagram, Point::new(10.0, 0.0))
            .unwrap();
        assert_eq!(note.node, a);
    }

    #[test]
    fn test_end_without_gesture_is_noop() {
        let (mut diagram, _) = diagram_with_rect();
        let mut interaction = Interaction::new();
        assert!(!interaction.end_resize(&mut diagram));
        assert!(interaction
            .pointer_moved(&mut diagram, Point::new(5.0, 5.0))
            .is_none());
    }

    #[test]
    fn test_end_is_idempotent() {
        let (mut diagram, id) = diagram_with_rect();
        let mut interaction = Interaction::new();

        interaction.begin_resize(&mut diagram, id, ResizeHandle::Top, Point::ZERO);
        assert!(interaction.end_resize(&mut diagram));
        assert!(!interaction.end_resize(&mut diagram));
    }

    #[test]
    fn test_cancel_restores_draggable() {
        let (mut diagram, id) = diagram_with_rect();
        let mut interaction = Interaction::new();

        interaction.begin_resize(&mut diagram, id, ResizeHandle::Left, Point::ZERO);
        assert!(interaction.cancel(&mut diagram));
        assert!(diagram.node(id).unwrap().draggable);
        assert!(interaction.cursor_hint().is_none());
    }

    #[test]
    fn test_scaled_node_resize_emits_scale() {
        let mut diagram = Diagram::new();
        let id = diagram.add_node(NodeKind::Ellipse, Point::ZERO);
        let mut interaction = Interaction::new();

        interaction.begin_resize(&mut diagram, id, ResizeHandle::BottomRight, Point::ZERO);
        let note = interaction
            .pointer_moved(&mut diagram, Point::new(50.0, 50.0))
            .unwrap();
        match note.update {
            ResizeUpdate::Scale(scale) => assert!((scale - 1.5).abs() < f64::EPSILON),
            ResizeUpdate::Size(_) => panic!("expected a scale update"),
        }
        // 96x64 base at 1.5.
        assert_eq!(diagram.node(id).unwrap().size(), Size::new(144.0, 96.0));
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut diagram = Diagram::new();
        let a = diagram.add_node(NodeKind::Rectangle, Point::ZERO);
        let b = diagram.add_node(NodeKind::Rectangle, Point::new(200.0, 0.0));
        let edge = diagram
            .connect(
                EdgeEnd::new(a, AnchorSide::Right),
                EdgeEnd::new(b, AnchorSide::Left),
                EdgeStyleKind::Default,
            )
            .unwrap();

        let mut interaction = Interaction::new();
        interaction.select_node(a);
        assert_eq!(interaction.selected_node(), Some(a));

        interaction.select_edge(edge);
        assert_eq!(interaction.selected_edge(), Some(edge));
        assert!(interaction.selected_node().is_none());

        interaction.clear_selection();
        assert!(interaction.selected_edge().is_none());
    }

    #[test]
    fn test_forget_removed_entities() {
        let (mut diagram, id) = diagram_with_rect();
        let b = diagram.add_node(NodeKind::Rectangle, Point::new(200.0, 0.0));
        let edge = diagram
            .connect(
                EdgeEnd::new(id, AnchorSide::Right),
                EdgeEnd::new(b, AnchorSide::Left),
                EdgeStyleKind::Default,
            )
            .unwrap();
        let mut interaction = Interaction::new();

        interaction.select_edge(edge);
        diagram.remove_edge(edge);
        interaction.forget_edge(edge);
        assert!(interaction.selected_edge().is_none());

        interaction.select_node(id);
        interaction.set_hovered(Some(id));
        diagram.remove_node(id);
        interaction.forget_node(id);

        assert!(interaction.selected_node().is_none());
        assert!(interaction.hovered_node().is_none());
    }
}
