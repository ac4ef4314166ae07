//! Diagram document: nodes, edges, and the operations on them.

use std::collections::HashMap;

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::anchor::AnchorSide;
use crate::node::{Node, NodeId, NodeKind};
use crate::resize::ResizeUpdate;
use crate::routing::{self, EdgePath, EdgeStyleKind};

/// Unique edge identifier.
pub type EdgeId = Uuid;

/// Offset applied to duplicated nodes, down and to the right.
const DUPLICATE_OFFSET: f64 = 30.0;

/// Errors from operations addressing records that are not in the diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("unknown edge {0}")]
    UnknownEdge(EdgeId),
}

/// One end of an edge: a node plus the side it attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeEnd {
    pub node: NodeId,
    pub side: AnchorSide,
}

impl EdgeEnd {
    pub fn new(node: NodeId, side: AnchorSide) -> Self {
        Self { node, side }
    }
}

/// A styled connection between two node anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: EdgeEnd,
    pub target: EdgeEnd,
    pub style: EdgeStyleKind,
}

/// The diagram document: all nodes and edges.
///
/// Nodes keep their insertion order, which is also the rendering order.
/// Edge endpoints are resolved lazily from the current node bounds, so
/// routed paths always follow node moves and resizes.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    nodes: HashMap<NodeId, Node>,
    /// Node insertion order (back to front).
    order: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Create an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node of the given kind at a position; returns its id.
    pub fn add_node(&mut self, kind: NodeKind, position: Point) -> NodeId {
        let node = Node::new(kind, position);
        let id = node.id;
        self.order.push(id);
        self.nodes.insert(id, node);
        id
    }

    /// Remove a node and every edge attached to it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.remove(&id)?;
        self.order.retain(|&n| n != id);
        self.edges
            .retain(|e| e.source.node != id && e.target.node != id);
        Some(node)
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Get a mutable reference to a node by id.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// All edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the diagram has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Connect two node anchors with a styled edge.
    pub fn connect(
        &mut self,
        source: EdgeEnd,
        target: EdgeEnd,
        style: EdgeStyleKind,
    ) -> Result<EdgeId, GraphError> {
        self.require_node(source.node)?;
        self.require_node(target.node)?;
        let edge = Edge {
            id: Uuid::new_v4(),
            source,
            target,
            style,
        };
        let id = edge.id;
        self.edges.push(edge);
        Ok(id)
    }

    /// Move an existing edge to new endpoints.
    pub fn reconnect(
        &mut self,
        id: EdgeId,
        source: EdgeEnd,
        target: EdgeEnd,
    ) -> Result<(), GraphError> {
        self.require_node(source.node)?;
        self.require_node(target.node)?;
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(GraphError::UnknownEdge(id))?;
        edge.source = source;
        edge.target = target;
        Ok(())
    }

    /// Remove an edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let index = self.edges.iter().position(|e| e.id == id)?;
        Some(self.edges.remove(index))
    }

    /// Change the style family of an edge.
    pub fn set_edge_style(&mut self, id: EdgeId, style: EdgeStyleKind) -> Result<(), GraphError> {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(GraphError::UnknownEdge(id))?;
        edge.style = style;
        Ok(())
    }

    /// Set a node's label.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.label = label.into();
        Ok(())
    }

    /// Apply a resize output to a node through its kind's policy.
    pub fn apply_resize(&mut self, id: NodeId, update: ResizeUpdate) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.apply_resize(update);
        Ok(())
    }

    /// Move a node by a delta.
    pub fn translate_node(&mut self, id: NodeId, delta: Vec2) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.translate(delta);
        Ok(())
    }

    /// Clone a node, offset down and to the right; returns the copy's id.
    pub fn duplicate(&mut self, id: NodeId) -> Option<NodeId> {
        let source = self.nodes.get(&id)?;
        let mut copy = source.clone();
        copy.id = Uuid::new_v4();
        copy.position = Point::new(
            copy.position.x + DUPLICATE_OFFSET,
            copy.position.y + DUPLICATE_OFFSET,
        );
        copy.draggable = true;
        let copy_id = copy.id;
        self.order.push(copy_id);
        self.nodes.insert(copy_id, copy);
        Some(copy_id)
    }

    /// Resolve an edge's current anchor positions from its nodes' bounds.
    pub fn edge_endpoints(&self, edge: &Edge) -> Option<(Point, Point)> {
        let source = self.nodes.get(&edge.source.node)?;
        let target = self.nodes.get(&edge.target.node)?;
        Some((
            edge.source.side.position(source.bounds()),
            edge.target.side.position(target.bounds()),
        ))
    }

    /// Route an edge from its resolved endpoints.
    pub fn route_edge(&self, edge: &Edge) -> Option<EdgePath> {
        let (source, target) = self.edge_endpoints(edge)?;
        Some(routing::route(source, target, edge.style))
    }

    fn require_node(&self, id: NodeId) -> Result<(), GraphError> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }
}
