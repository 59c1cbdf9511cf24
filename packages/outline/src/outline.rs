use serde::{Deserialize, Serialize};

/// Deepest numbering (in dot-separated segments) an outline may contain
pub const MAX_DEPTH: usize = 7;

/// Options for outline derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeriveOptions {
    /// Maximum depth; 0 is treated as 1 so the root is always emitted
    pub max_depth: usize,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

impl DeriveOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

/// One numbered line of the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Dotted position such as `1.2.1`
    pub numbering: String,

    /// Raw Markdown text of the node
    pub text: String,
}

impl OutlineEntry {
    pub fn new(numbering: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            numbering: numbering.into(),
            text: text.into(),
        }
    }

    /// Number of dot-separated segments in the numbering
    pub fn depth(&self) -> usize {
        self.numbering.split('.').count()
    }
}

/// How the root node was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "nodeId", rename_all = "camelCase")]
pub enum RootSelection {
    /// No nodes at all
    Empty,

    /// First node in sequence order without inbound edges
    InDegreeZero(String),

    /// Every node has an inbound edge; the first node was used
    Fallback(String),
}

impl RootSelection {
    pub fn node_id(&self) -> Option<&str> {
        match self {
            RootSelection::Empty => None,
            RootSelection::InDegreeZero(id) | RootSelection::Fallback(id) => Some(id),
        }
    }
}

/// Derived outline plus diagnostics about degenerate input.
///
/// The diagnostics never influence rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Entries in depth-first pre-order
    pub entries: Vec<OutlineEntry>,

    pub root: RootSelection,

    /// Edges not followed because an endpoint does not exist
    pub dangling_edges: usize,

    /// Child links not followed because of the depth bound
    pub truncated_branches: usize,
}

impl Outline {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            root: RootSelection::Empty,
            dangling_edges: 0,
            truncated_branches: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutlineEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineEntry;
    type IntoIter = std::slice::Iter<'a, OutlineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
