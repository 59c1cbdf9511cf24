//! # Canvas Mutations
//!
//! Semantic edits the canvas performs on a mindmap.
//!
//! ## Mutation Semantics
//!
//! ### AddNode / AddEdge
//! - Ids must be unique within the map
//! - Edges need both endpoints to exist and may not point at their source
//!
//! ### MoveNode / ResizeNode / UpdateText
//! - Atomic replacement of the affected fields
//! - Last write wins
//!
//! ### RemoveNode
//! - Removes the node only; edges touching it stay behind as dangling
//!   edges, which export skips

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::mindmap::{Edge, Mindmap, Node};

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Mutation {
    /// Append a node to the end of the node sequence
    AddNode { node: Node },

    /// Drag a node to a new canvas position
    MoveNode { node_id: String, x: f64, y: f64 },

    /// Record the rendered size of a node
    ResizeNode {
        node_id: String,
        width: f64,
        height: f64,
    },

    /// Replace the Markdown text of a node
    UpdateText { node_id: String, text: String },

    RemoveNode { node_id: String },

    /// Append an edge to the end of the edge sequence
    AddEdge { edge: Edge },

    RemoveEdge { edge_id: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("Duplicate edge id: {0}")]
    DuplicateEdgeId(String),

    #[error("Edge would connect node {0} to itself")]
    SelfLoop(String),

    #[error("Invalid size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

impl Mutation {
    /// Apply mutation to the map with validation
    pub fn apply(&self, map: &mut Mindmap) -> Result<(), MutationError> {
        self.validate(map)?;
        debug!(mutation = self.name(), map_id = %map.id, "Applying mutation");

        match self {
            Mutation::AddNode { node } => {
                map.nodes.push(node.clone());
            }

            Mutation::MoveNode { node_id, x, y } => {
                let node = Self::node_mut(map, node_id)?;
                node.x = *x;
                node.y = *y;
            }

            Mutation::ResizeNode {
                node_id,
                width,
                height,
            } => {
                let node = Self::node_mut(map, node_id)?;
                node.width = *width;
                node.height = *height;
            }

            Mutation::UpdateText { node_id, text } => {
                Self::node_mut(map, node_id)?.text = text.clone();
            }

            Mutation::RemoveNode { node_id } => {
                map.nodes.retain(|n| &n.node_id != node_id);
            }

            Mutation::AddEdge { edge } => {
                map.edges.push(edge.clone());
            }

            Mutation::RemoveEdge { edge_id } => {
                map.edges.retain(|e| &e.id != edge_id);
            }
        }

        Ok(())
    }

    fn node_mut<'a>(map: &'a mut Mindmap, node_id: &str) -> Result<&'a mut Node, MutationError> {
        map.node_mut(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))
    }

    fn require_node(map: &Mindmap, node_id: &str) -> Result<(), MutationError> {
        map.node(node_id)
            .map(|_| ())
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))
    }

    /// Validate without applying
    pub fn validate(&self, map: &Mindmap) -> Result<(), MutationError> {
        match self {
            Mutation::AddNode { node } => {
                if map.node(&node.node_id).is_some() {
                    return Err(MutationError::DuplicateNodeId(node.node_id.clone()));
                }
                Ok(())
            }

            Mutation::MoveNode { node_id, .. }
            | Mutation::UpdateText { node_id, .. }
            | Mutation::RemoveNode { node_id } => Self::require_node(map, node_id),

            Mutation::ResizeNode {
                node_id,
                width,
                height,
            } => {
                Self::require_node(map, node_id)?;
                if !(width.is_finite() && height.is_finite()) || *width <= 0.0 || *height <= 0.0 {
                    return Err(MutationError::InvalidSize {
                        width: *width,
                        height: *height,
                    });
                }
                Ok(())
            }

            Mutation::AddEdge { edge } => {
                if map.edge(&edge.id).is_some() {
                    return Err(MutationError::DuplicateEdgeId(edge.id.clone()));
                }
                if edge.is_self_loop() {
                    return Err(MutationError::SelfLoop(edge.from.clone()));
                }
                Self::require_node(map, &edge.from)?;
                Self::require_node(map, &edge.to)
            }

            Mutation::RemoveEdge { edge_id } => {
                map.edge(edge_id)
                    .map(|_| ())
                    .ok_or_else(|| MutationError::EdgeNotFound(edge_id.clone()))
            }
        }
    }

    /// Get a debug name for this mutation
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddNode { .. } => "add_node",
            Mutation::MoveNode { .. } => "move_node",
            Mutation::ResizeNode { .. } => "resize_node",
            Mutation::UpdateText { .. } => "update_text",
            Mutation::RemoveNode { .. } => "remove_node",
            Mutation::AddEdge { .. } => "add_edge",
            Mutation::RemoveEdge { .. } => "remove_edge",
        }
    }
}

/// Result of applying a mutation to a document
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// New version number
    pub version: u64,
}
