//! # Mindmap Model
//!
//! Document model for node-and-edge mindmaps.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Mindmap documents                    │
//! │  - Nodes, edges, O(1) node index            │
//! │  - Validated canvas mutations               │
//! │  - Ownership, favorites, share links        │
//! │  - Load/save JSON documents                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ outline: nodes + edges → numbered outline   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-markdown: outline → Markdown       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mindmap_model::{MindmapDocument, Mutation, UuidIdGenerator};
//!
//! let mut doc = MindmapDocument::load("plan.json")?;
//! let mut ids = UuidIdGenerator;
//!
//! let node = doc.map().new_node(&mut ids, 120.0, 80.0);
//! doc.apply(Mutation::AddNode { node })?;
//!
//! doc.save()?;
//! ```

mod document;
mod errors;
mod id_generator;
mod mindmap;
mod mutations;
mod sharing;

pub use document::{DocumentStorage, MindmapDocument};
pub use errors::{ModelError, ModelResult};
pub use id_generator::{
    IdGenerator, SequentialIdGenerator, UuidIdGenerator, EDGE_PREFIX, MINDMAP_PREFIX,
    NODE_PREFIX, SHARE_PREFIX,
};
pub use mindmap::{
    Edge, Mindmap, Node, NodeIndex, DEFAULT_NODE_HEIGHT, DEFAULT_NODE_TEXT, DEFAULT_NODE_WIDTH,
    DEFAULT_TITLE,
};
pub use mutations::{Mutation, MutationError, MutationResult};
pub use sharing::{AccessError, MindmapUpdate, CLONE_TITLE_SUFFIX};
