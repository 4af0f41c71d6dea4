use std::sync::Arc;

use lingo_types::Document;
use serde::Serialize;

use crate::skip::SkipRule;

/// The locale translations are made from.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceLocale {
    pub lang: String,
    pub document: Document,
    /// The source as it was at the last sync. Entries whose value changed
    /// since then are translated again even if the target has them.
    pub previous: Option<Document>,
}

impl SourceLocale {
    pub fn new(lang: impl Into<String>, document: Document) -> Self {
        Self {
            lang: lang.into(),
            document,
            previous: None,
        }
    }

    pub fn with_previous(mut self, previous: Document) -> Self {
        self.previous = Some(previous);
        self
    }
}

/// The locale being brought up to date.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetLocale {
    pub lang: String,
    pub document: Document,
}

impl TargetLocale {
    pub fn new(lang: impl Into<String>, document: Document) -> Self {
        Self {
            lang: lang.into(),
            document,
        }
    }
}

#[derive(Clone)]
pub struct SyncRequest {
    pub source: SourceLocale,
    pub target: TargetLocale,
    pub skip: Option<Arc<dyn SkipRule>>,
}

impl SyncRequest {
    pub fn new(source: SourceLocale, target: TargetLocale) -> Self {
        Self {
            source,
            target,
            skip: None,
        }
    }

    pub fn with_skip(mut self, rule: impl SkipRule + 'static) -> Self {
        self.skip = Some(Arc::new(rule));
        self
    }
}

/// The three layers a sync merges, computed before any translation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SyncPlan {
    /// Target entries that already fit the source.
    pub subset: Document,
    /// Source entries to send to the translator.
    pub to_translate: Document,
    /// Target subtrees selected by the skip rule, copied verbatim.
    pub ignored: Document,
    /// Paths the skip rule matched.
    pub skipped: Vec<String>,
}

impl SyncPlan {
    /// Returns `true` if the translator has nothing to do.
    pub fn is_up_to_date(&self) -> bool {
        self.to_translate.as_object().map_or(true, |m| m.is_empty())
    }
}
