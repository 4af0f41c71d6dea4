use std::sync::Arc;

use lingo_processor::{ChatTransport, TextTransport};
use lingo_sync::{LocaleSync, SourceLocale, SyncRequest, TargetLocale};
use lingo_translate::{ChatTranslator, TextTranslator, Translator};

use crate::config::LingoConfig;

/// Builds the pipeline's components from one configuration.
#[derive(Clone, Debug, Default)]
pub struct Lingo {
    config: LingoConfig,
}

impl Lingo {
    pub fn new(config: LingoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LingoConfig {
        &self.config
    }

    pub fn chat_translator(&self, transport: Arc<dyn ChatTransport>) -> ChatTranslator {
        ChatTranslator::new(transport, self.config.processor.clone())
    }

    pub fn text_translator(&self, transport: Arc<dyn TextTransport>) -> TextTranslator {
        TextTranslator::new(transport, self.config.translator.clone())
    }

    pub fn locale_sync(&self, translator: Arc<dyn Translator>) -> LocaleSync {
        LocaleSync::new(translator)
    }

    /// A sync request carrying the configured skip prefixes.
    pub fn sync_request(&self, source: SourceLocale, target: TargetLocale) -> SyncRequest {
        let request = SyncRequest::new(source, target);
        match self.config.sync.skip_rule() {
            Some(rule) => request.with_skip(rule),
            None => request,
        }
    }
}
