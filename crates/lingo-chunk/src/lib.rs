//! Chunker for Lingo.
//!
//! Splits the top-level entries of an object document into ordered chunks
//! whose compact JSON serialization stays within a length limit. The limit
//! is advisory: an entry that is too large on its own is emitted alone
//! rather than truncated or dropped.

pub mod chunk;
pub mod error;
pub mod slicer;

pub use chunk::Chunk;
pub use error::{ChunkError, ChunkResult};
pub use slicer::{slice, slice_entries};
