//! Error types for the chunk crate.

use lingo_types::{NodeKind, TypeError};

/// Errors that can occur while slicing a document.
#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    /// Only object documents can be sliced.
    #[error("unsupported input kind: expected object, got {0}")]
    UnsupportedInputKind(NodeKind),

    /// An entry could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<TypeError> for ChunkError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::NotAnObject(kind) => Self::UnsupportedInputKind(kind),
        }
    }
}

/// Convenience alias for chunk results.
pub type ChunkResult<T> = Result<T, ChunkError>;
