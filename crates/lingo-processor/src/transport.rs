//! Interfaces to the external text generator.
//!
//! The concrete client (transport, authentication, rate limiting) lives
//! outside this workspace. It declares how long a prompt may be and how
//! long callers should wait between calls; the interval is advisory and is
//! not enforced by the pipeline.

use std::time::Duration;

use async_trait::async_trait;
use lingo_types::Message;
use thiserror::Error;

/// Errors raised by a text generator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("generator returned an empty response")]
    EmptyResponse,
}

pub type TransportResult<T> = Result<T, TransportError>;

/// A generator that continues a conversation.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Maximum prompt length, in characters.
    fn max_prompt_length(&self) -> usize;

    /// Minimum delay callers should leave between calls.
    fn min_call_interval(&self) -> Duration {
        Duration::ZERO
    }

    /// Send `conversation` and return the newly generated messages. The
    /// last returned message carries the reply text.
    async fn complete(&self, conversation: &[Message]) -> TransportResult<Vec<Message>>;
}

/// A generator that maps a single prompt to a single reply.
#[async_trait]
pub trait TextTransport: Send + Sync {
    /// Maximum prompt length, in characters.
    fn max_prompt_length(&self) -> usize;

    /// Minimum delay callers should leave between calls.
    fn min_call_interval(&self) -> Duration {
        Duration::ZERO
    }

    /// Send `prompt` and return the generated text.
    async fn complete(&self, prompt: &str) -> TransportResult<String>;
}
