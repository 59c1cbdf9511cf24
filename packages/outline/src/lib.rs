//! # Mindmap Outline
//!
//! Turns a mindmap's node/edge graph into a numbered, depth-bounded outline.
//!
//! The graph may be cyclic, disconnected or contain dangling edges. The
//! derivation never fails: every input produces a (possibly empty) outline.
//!
//! ```rust,ignore
//! use mindmap_outline::{derive_outline, DeriveOptions};
//!
//! let outline = derive_outline(&map.nodes, &map.edges, &DeriveOptions::default());
//! for entry in outline.iter() {
//!     println!("{} {}", entry.numbering, entry.text);
//! }
//! ```

mod deriver;
mod outline;

#[cfg(test)]
mod tests;

pub use deriver::{derive_mindmap, derive_outline};
pub use outline::{DeriveOptions, Outline, OutlineEntry, RootSelection, MAX_DEPTH};
