use std::sync::Arc;

use lingo_chunk::Chunk;
use lingo_types::{Document, Message, ValidationResult};

/// Builds the conversation that asks the generator to transform a chunk.
pub trait PromptBuilder: Send + Sync {
    fn build(&self, chunk: &Chunk) -> Vec<Message>;
}

impl<F> PromptBuilder for F
where
    F: Fn(&Chunk) -> Vec<Message> + Send + Sync,
{
    fn build(&self, chunk: &Chunk) -> Vec<Message> {
        self(chunk)
    }
}

/// Checks a transformed document against the document it was produced from.
pub trait DocumentValidator: Send + Sync {
    fn validate(&self, original: &Document, transformed: &Document) -> ValidationResult;
}

impl<F> DocumentValidator for F
where
    F: Fn(&Document, &Document) -> ValidationResult + Send + Sync,
{
    fn validate(&self, original: &Document, transformed: &Document) -> ValidationResult {
        self(original, transformed)
    }
}

/// What to do with each chunk, and how to check the results.
#[derive(Clone)]
pub struct ChunkTask {
    pub prompt_builder: Arc<dyn PromptBuilder>,
    /// Runs on every parsed reply; failures are retried.
    pub validate_chunk: Option<Arc<dyn DocumentValidator>>,
    /// Runs once on the reassembled document; failures are final.
    pub validate_whole: Option<Arc<dyn DocumentValidator>>,
}

impl ChunkTask {
    pub fn new(prompt_builder: impl PromptBuilder + 'static) -> Self {
        Self {
            prompt_builder: Arc::new(prompt_builder),
            validate_chunk: None,
            validate_whole: None,
        }
    }

    pub fn with_chunk_validator(mut self, validator: impl DocumentValidator + 'static) -> Self {
        self.validate_chunk = Some(Arc::new(validator));
        self
    }

    pub fn with_whole_validator(mut self, validator: impl DocumentValidator + 'static) -> Self {
        self.validate_whole = Some(Arc::new(validator));
        self
    }
}
