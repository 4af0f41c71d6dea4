//! The public operations.

use std::sync::Arc;

use lingo_processor::{ChatTransport, ChunkProcessor, ChunkTask, ProcessorConfig};
use lingo_sync::{LocaleSync, SyncRequest};
use lingo_translate::Translator;
use lingo_types::Document;

use crate::error::SdkResult;

/// Run `document` through `transport` chunk by chunk with `task`.
pub async fn process_document(
    transport: Arc<dyn ChatTransport>,
    config: ProcessorConfig,
    document: &Document,
    task: &ChunkTask,
) -> SdkResult<Document> {
    let processor = ChunkProcessor::new(transport, config);
    Ok(processor.process(document, task).await?)
}

/// Translate every value of `document` from `from_lang` to `to_lang`.
pub async fn translate_document(
    translator: &dyn Translator,
    document: &Document,
    from_lang: &str,
    to_lang: &str,
) -> SdkResult<Document> {
    Ok(translator.translate(document, from_lang, to_lang).await?)
}

/// Bring a target locale up to date with its source.
pub async fn sync_locale(translator: Arc<dyn Translator>, request: &SyncRequest) -> SdkResult<Document> {
    Ok(LocaleSync::new(translator).sync(request).await?)
}
