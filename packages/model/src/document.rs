//! # Document Handle
//!
//! Editing state around a single mindmap.
//!
//! A document is either:
//! - **Memory-backed**: created from JSON, for tests and in-memory edits
//! - **File-backed**: loaded from a `.json` file and saved back to it
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Export → Save
//!   ↓      ↓       ↓       ↓
//! JSON Mutations Outline  JSON
//! ```

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{ModelError, ModelResult};
use crate::mindmap::Mindmap;
use crate::mutations::{Mutation, MutationResult};

/// Editable mindmap document
#[derive(Debug)]
pub struct MindmapDocument {
    /// Current version number (increments on each mutation attempt)
    pub version: u64,

    map: Mindmap,

    storage: DocumentStorage,
}

/// Storage backend for a document
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentStorage {
    Memory,

    File { path: PathBuf, dirty: bool },
}

impl MindmapDocument {
    pub fn new(map: Mindmap) -> Self {
        Self {
            version: 0,
            map,
            storage: DocumentStorage::Memory,
        }
    }

    /// Create a memory-backed document from JSON
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(Self::new(Mindmap::from_json(json)?))
    }

    /// Load a file-backed document
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let map = Mindmap::from_json(&source)?;
        debug!(
            path = %path.display(),
            nodes = map.nodes.len(),
            edges = map.edges.len(),
            "Loaded mindmap"
        );

        Ok(Self {
            version: 0,
            map,
            storage: DocumentStorage::File {
                path: path.to_path_buf(),
                dirty: false,
            },
        })
    }

    pub fn map(&self) -> &Mindmap {
        &self.map
    }

    pub fn into_map(self) -> Mindmap {
        self.map
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.storage {
            DocumentStorage::File { path, .. } => Some(path),
            DocumentStorage::Memory => None,
        }
    }

    /// Apply a mutation. The version advances even when validation fails.
    pub fn apply(&mut self, mutation: Mutation) -> ModelResult<MutationResult> {
        self.version += 1;
        mutation.apply(&mut self.map)?;

        if let DocumentStorage::File { dirty, .. } = &mut self.storage {
            *dirty = true;
        }

        Ok(MutationResult {
            version: self.version,
        })
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            DocumentStorage::Memory => false,
        }
    }

    /// Save document to disk (if file-backed)
    pub fn save(&mut self) -> ModelResult<()> {
        match &mut self.storage {
            DocumentStorage::File { path, dirty } => {
                std::fs::write(&*path, self.map.to_json_pretty()?)?;
                debug!(path = %path.display(), version = self.version, "Saved mindmap");
                *dirty = false;
                Ok(())
            }
            DocumentStorage::Memory => Err(ModelError::NotFileBacked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"{
        "id": "mindmap_1",
        "title": "Plan",
        "nodes": [
            { "nodeId": "n1", "text": "Root" },
            { "nodeId": "n2", "text": "Child" }
        ],
        "edges": [{ "id": "e1", "from": "n1", "to": "n2" }]
    }"#;

    #[test]
    fn test_create_memory_document() {
        let doc = MindmapDocument::from_json(SOURCE).unwrap();

        assert_eq!(doc.version, 0);
        assert!(!doc.is_dirty());
        assert!(doc.path().is_none());
        assert_eq!(doc.map().nodes.len(), 2);
    }

    #[test]
    fn test_document_version_increments() {
        let mut doc = MindmapDocument::from_json(SOURCE).unwrap();

        let mutation = Mutation::UpdateText {
            node_id: "missing".to_string(),
            text: "Hello".to_string(),
        };

        assert!(doc.apply(mutation).is_err());
        assert_eq!(doc.version, 1);
    }

    #[test]
    fn test_memory_document_cannot_save() {
        let mut doc = MindmapDocument::from_json(SOURCE).unwrap();
        assert!(matches!(doc.save(), Err(ModelError::NotFileBacked)));
    }
}
