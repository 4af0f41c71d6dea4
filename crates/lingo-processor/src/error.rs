//! Error types for the processor crate.

use std::fmt;

use lingo_chunk::ChunkError;

use crate::transport::TransportError;

/// Where a structural mismatch was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MismatchScope {
    /// While validating the reply for one chunk.
    Chunk(usize),
    /// While validating the reassembled document.
    Merge,
}

impl fmt::Display for MismatchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chunk(index) => write!(f, "chunk {index}"),
            Self::Merge => f.write_str("final merge"),
        }
    }
}

/// Errors that can occur while processing a document.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The input could not be sliced.
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkError),

    /// A reply could not be parsed as an object document.
    #[error("chunk {chunk}: reply is not a valid document: {message}")]
    Parse { chunk: usize, message: String },

    /// A reply or the merged result does not have the source's structure.
    #[error("structural mismatch at {scope}: {reason}")]
    StructuralMismatch { scope: MismatchScope, reason: String },

    /// The text generator failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A worker task ended abnormally.
    #[error("worker failed: {0}")]
    Worker(String),
}

impl ProcessError {
    /// Create a structural mismatch error.
    pub fn mismatch(scope: MismatchScope, reason: impl Into<String>) -> Self {
        Self::StructuralMismatch {
            scope,
            reason: reason.into(),
        }
    }
}

/// Convenience alias for processor results.
pub type ProcessResult<T> = Result<T, ProcessError>;
