//! # Mindmap Document Model
//!
//! Nodes and edges of a single mindmap, as persisted and exchanged with the
//! canvas UI.
//!
//! Both `nodes` and `edges` are ordered sequences. Their order is the only
//! priority the model knows about: it decides root selection and sibling
//! order when the document is exported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::id_generator::{IdGenerator, EDGE_PREFIX, NODE_PREFIX};

pub const DEFAULT_NODE_WIDTH: f64 = 150.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 80.0;
pub const DEFAULT_NODE_TEXT: &str = "New node";
pub const DEFAULT_TITLE: &str = "New map";

fn default_width() -> f64 {
    DEFAULT_NODE_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_NODE_HEIGHT
}

/// Stored documents may carry explicit `null`s; read them as the field default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_width<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_NODE_WIDTH))
}

fn null_as_height<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_NODE_HEIGHT))
}

/// A box on the canvas holding Markdown text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub node_id: String,

    /// Markdown source
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub x: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub y: f64,

    #[serde(default = "default_width", deserialize_with = "null_as_width")]
    pub width: f64,

    #[serde(default = "default_height", deserialize_with = "null_as_height")]
    pub height: f64,
}

impl Node {
    pub fn new(node_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            text: text.into(),
            x: 0.0,
            y: 0.0,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Directed parent -> child relation between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// An edge is dangling when either endpoint is missing from the index.
    pub fn is_dangling(&self, index: &NodeIndex<'_>) -> bool {
        !index.contains(&self.from) || !index.contains(&self.to)
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// A whole mindmap: the unit of persistence, sharing and export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mindmap {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Node>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<Edge>,

    /// Id of the owning user
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub favorite: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_public: bool,

    #[serde(default)]
    pub public_share_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Mindmap {
    /// Create an empty, private mindmap. An empty title falls back to the default.
    pub fn new(id: impl Into<String>, title: impl Into<String>, owner: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title
            },
            nodes: Vec::new(),
            edges: Vec::new(),
            owner: owner.into(),
            favorite: false,
            is_public: false,
            public_share_id: None,
            created_at: Some(Utc::now()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn index(&self) -> NodeIndex<'_> {
        NodeIndex::new(&self.nodes)
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.node_id == node_id)
    }

    pub fn node_mut(&mut self, node_id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.node_id == node_id)
    }

    pub fn edge(&self, edge_id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == edge_id)
    }

    /// Build a default node for this map. The node is not inserted; pass it
    /// to `Mutation::AddNode`.
    pub fn new_node(&self, ids: &mut dyn IdGenerator, x: f64, y: f64) -> Node {
        Node::new(ids.new_id(NODE_PREFIX), DEFAULT_NODE_TEXT).at(x, y)
    }

    /// Build an edge between two nodes. Not inserted; see `Mutation::AddEdge`.
    pub fn connect(&self, ids: &mut dyn IdGenerator, from: &str, to: &str) -> Edge {
        Edge::new(ids.new_id(EDGE_PREFIX), from, to)
    }

    /// Edges whose endpoints do not both exist
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        let index = self.index();
        self.edges.iter().filter(|e| e.is_dangling(&index)).collect()
    }
}

/// O(1) lookup from node id to its position in the node sequence.
///
/// If loaded data contains duplicate ids the first occurrence wins.
#[derive(Debug, Clone)]
pub struct NodeIndex<'a> {
    nodes: &'a [Node],
    positions: HashMap<&'a str, usize>,
}

impl<'a> NodeIndex<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        let mut positions = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            positions.entry(node.node_id.as_str()).or_insert(position);
        }
        Self { nodes, positions }
    }

    pub fn position(&self, node_id: &str) -> Option<usize> {
        self.positions.get(node_id).copied()
    }

    pub fn get(&self, node_id: &str) -> Option<&'a Node> {
        self.position(node_id).map(|position| &self.nodes[position])
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.positions.contains_key(node_id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
