//! Conversation-based translator.

use std::sync::Arc;

use async_trait::async_trait;
use lingo_processor::{ChatTransport, Chunk, ChunkProcessor, ChunkTask, ProcessorConfig};
use lingo_types::Document;
use tracing::{debug, info};

use crate::error::TranslateResult;
use crate::prompt::chat_prompt;
use crate::translator::{check_languages, Translator};
use crate::validator::{CorrectionBuilder, PathListCorrection, TranslationValidator};

/// Translates through the chunk worker pool.
///
/// Every chunk reply is validated by leaf paths; a failing reply gets a
/// correction request appended to its conversation unless correction is
/// disabled. The reassembled document is validated once more without a
/// correction.
pub struct ChatTranslator {
    processor: ChunkProcessor,
    correction: Option<Arc<dyn CorrectionBuilder>>,
}

impl ChatTranslator {
    pub fn new(transport: Arc<dyn ChatTransport>, config: ProcessorConfig) -> Self {
        Self {
            processor: ChunkProcessor::new(transport, config),
            correction: Some(Arc::new(PathListCorrection)),
        }
    }

    /// Replace the correction callback.
    pub fn with_correction(mut self, correction: impl CorrectionBuilder + 'static) -> Self {
        self.correction = Some(Arc::new(correction));
        self
    }

    /// Retry failed chunks with a fresh conversation instead of a correction.
    pub fn without_correction(mut self) -> Self {
        self.correction = None;
        self
    }

    fn task(&self, from_lang: &str, to_lang: &str) -> ChunkTask {
        let (from, to) = (from_lang.to_owned(), to_lang.to_owned());
        let chunk_validator =
            TranslationValidator::new(from_lang, to_lang).with_correction(self.correction.clone());
        ChunkTask::new(move |chunk: &Chunk| chat_prompt(chunk, &from, &to))
            .with_chunk_validator(chunk_validator)
            .with_whole_validator(TranslationValidator::new(from_lang, to_lang))
    }
}

#[async_trait]
impl Translator for ChatTranslator {
    async fn translate(
        &self,
        document: &Document,
        from_lang: &str,
        to_lang: &str,
    ) -> TranslateResult<Document> {
        check_languages(from_lang, to_lang)?;
        info!(from = from_lang, to = to_lang, "translating document");
        let task = self.task(from_lang, to_lang);
        let translated = self.processor.process(document, &task).await?;
        debug!(from = from_lang, to = to_lang, "translation complete");
        Ok(translated)
    }
}
