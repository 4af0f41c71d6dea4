//! Chunk processor for Lingo.
//!
//! Slices a document into chunks, sends every chunk through a
//! conversation transport on a fixed-size worker pool, retries and
//! optionally self-corrects bad replies, and reassembles the replies into a
//! single document in original entry order.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! let processor = ChunkProcessor::new(transport, ProcessorConfig::default());
//! let task = ChunkTask::new(|chunk: &Chunk| vec![Message::user(chunk.text.clone())]);
//! let output = processor.process(&document, &task).await?;
//! ```

pub mod config;
pub mod error;
pub mod processor;
pub mod reply;
pub mod task;
pub mod transport;

pub use config::ProcessorConfig;
pub use error::{MismatchScope, ProcessError, ProcessResult};
pub use processor::ChunkProcessor;
pub use reply::{align_reply, parse_reply};
pub use task::{ChunkTask, DocumentValidator, PromptBuilder};
pub use transport::{ChatTransport, TextTransport, TransportError, TransportResult};

pub use lingo_chunk::Chunk;
