//! Foundation types for Lingo.
//!
//! This crate provides the document model and the small value types shared
//! by every stage of the translation pipeline. Every other Lingo crate
//! depends on `lingo-types`.
//!
//! # Key Types
//!
//! - [`Document`] / [`Entries`]: Order-preserving JSON tree and its object map
//! - [`NodeKind`]: Shape classification of a document node
//! - [`Message`] / [`Role`]: One turn of a conversation with a text generator
//! - [`ValidationResult`]: Outcome of comparing a transformed document to its source

pub mod document;
pub mod error;
pub mod message;
pub mod validation;

pub use document::{as_entries, is_truthy, Document, Entries, NodeKind};
pub use error::TypeError;
pub use message::{Message, Role};
pub use validation::ValidationResult;
