//! Error types for the document model

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid mindmap JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Access error: {0}")]
    Access(#[from] crate::sharing::AccessError),

    #[error("Document is not file-backed")]
    NotFileBacked,
}

/// Result alias for fallible model operations
pub type ModelResult<T> = Result<T, ModelError>;
