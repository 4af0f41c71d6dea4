//! Plain-text translator.
//!
//! Chunks are sent one at a time, in order. A reply is accepted once it
//! parses to an object with exactly the chunk's shape; anything else is
//! retried up to the configured number of extra attempts.

use std::sync::Arc;

use async_trait::async_trait;
use lingo_chunk::{slice, Chunk};
use lingo_diff::{equal_structure, same_kind};
use lingo_processor::{align_reply, parse_reply, MismatchScope, ProcessError, TextTransport};
use lingo_types::{Document, Entries};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::TranslatorConfig;
use crate::error::TranslateResult;
use crate::prompt::text_prompt;
use crate::translator::{check_languages, Translator};

pub struct TextTranslator {
    transport: Arc<dyn TextTransport>,
    config: TranslatorConfig,
}

impl TextTranslator {
    pub fn new(transport: Arc<dyn TextTransport>, config: TranslatorConfig) -> Self {
        Self { transport, config }
    }

    async fn translate_chunk(
        &self,
        chunk: &Chunk,
        from_lang: &str,
        to_lang: &str,
    ) -> Result<Document, ProcessError> {
        let original = chunk.to_document();
        let prompt = text_prompt(chunk, from_lang, to_lang);
        let max_attempts = self.config.plain_text_retries + 1;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            let error = match self.transport.complete(&prompt).await {
                Err(err) => ProcessError::from(err),
                Ok(reply) => match parse_reply(&reply) {
                    Err(message) => ProcessError::Parse {
                        chunk: chunk.index,
                        message,
                    },
                    Ok(entries) => {
                        let parsed = align_reply(&original, Value::Object(entries));
                        if equal_structure(&original, &parsed, &same_kind) {
                            return Ok(parsed);
                        }
                        ProcessError::mismatch(
                            MismatchScope::Chunk(chunk.index),
                            "reply does not have the structure of the source",
                        )
                    }
                },
            };
            warn!(chunk = chunk.index, attempt, max_attempts, error = %error, "chunk attempt failed");
            last_error = Some(error);
        }

        Err(last_error.unwrap_or_else(|| {
            ProcessError::Worker(format!("chunk {} was never attempted", chunk.index))
        }))
    }
}

#[async_trait]
impl Translator for TextTranslator {
    async fn translate(
        &self,
        document: &Document,
        from_lang: &str,
        to_lang: &str,
    ) -> TranslateResult<Document> {
        check_languages(from_lang, to_lang)?;
        let chunks = slice(document, self.transport.max_prompt_length(), None)?;
        info!(from = from_lang, to = to_lang, chunks = chunks.len(), "translating document");

        let mut merged = Entries::new();
        for chunk in &chunks {
            debug!(chunk = chunk.index, entries = chunk.len(), "translating chunk");
            if let Value::Object(entries) = self.translate_chunk(chunk, from_lang, to_lang).await? {
                merged.extend(entries);
            }
        }
        let merged = Value::Object(merged);

        if !equal_structure(document, &merged, &same_kind) {
            warn!("merged translation does not match the source structure");
            return Err(ProcessError::mismatch(
                MismatchScope::Merge,
                "merged translation does not have the structure of the source",
            )
            .into());
        }
        Ok(merged)
    }
}
