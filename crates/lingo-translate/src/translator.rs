use async_trait::async_trait;
use lingo_types::Document;

use crate::error::{TranslateError, TranslateResult};

/// Translates every value of a document, keeping its structure.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        document: &Document,
        from_lang: &str,
        to_lang: &str,
    ) -> TranslateResult<Document>;
}

/// Reject blank language codes before any work starts.
pub(crate) fn check_languages(from_lang: &str, to_lang: &str) -> TranslateResult<()> {
    for lang in [from_lang, to_lang] {
        if lang.trim().is_empty() {
            return Err(TranslateError::InvalidLanguage(lang.to_owned()));
        }
    }
    Ok(())
}
