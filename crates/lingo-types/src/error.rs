use thiserror::Error;

use crate::document::NodeKind;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("expected an object document, got {0}")]
    NotAnObject(NodeKind),
}
