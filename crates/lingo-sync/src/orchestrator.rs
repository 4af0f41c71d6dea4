//! Sync orchestration: plan, translate, merge.

use std::sync::Arc;

use lingo_diff::{
    extract_paths, patch, remove_path, same_kind, strict_value, visit_object_paths, NodePath,
    Visit,
};
use lingo_merge::deep_merge;
use lingo_translate::Translator;
use lingo_types::{Document, Entries};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{SyncError, SyncResult};
use crate::skip::{SkipContext, SkipRule};
use crate::types::{SyncPlan, SyncRequest};

/// Synchronizes target locales with their source through a translator.
pub struct LocaleSync {
    translator: Arc<dyn Translator>,
}

impl LocaleSync {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Work out what a sync would translate, keep, and copy, without
    /// translating anything.
    pub fn plan(&self, request: &SyncRequest) -> SyncResult<SyncPlan> {
        plan(request)
    }

    /// Bring `request.target` up to date and return the merged document.
    ///
    /// The inputs are not modified; on error nothing is merged.
    pub async fn sync(&self, request: &SyncRequest) -> SyncResult<Document> {
        let plan = plan(request)?;
        let translated = if plan.is_up_to_date() {
            debug!(target_lang = %request.target.lang, "target is up to date");
            Value::Object(Entries::new())
        } else {
            self.translator
                .translate(
                    &plan.to_translate,
                    &request.source.lang,
                    &request.target.lang,
                )
                .await?
        };
        Ok(deep_merge(&[&plan.subset, &translated, &plan.ignored]))
    }
}

/// Compute the sync plan for `request` without translating anything.
pub fn plan(request: &SyncRequest) -> SyncResult<SyncPlan> {
    let source = &request.source;
    let target = &request.target;
    require_object(&source.document, "source")?;
    require_object(&target.document, "target")?;
    if let Some(previous) = &source.previous {
        require_object(previous, "previous source")?;
    }

    let baseline = patch(&source.document, &target.document, &same_kind);
    let mut to_translate = baseline.superset_document();
    if let Some(previous) = &source.previous {
        let changed = patch(&source.document, previous, &strict_value).superset_document();
        to_translate = deep_merge(&[&to_translate, &changed]);
    }

    let mut skipped = Vec::new();
    let mut ignored = Value::Object(Entries::new());
    if let Some(rule) = &request.skip {
        let paths = skip_paths(rule.as_ref(), &target.document);
        for path in &paths {
            to_translate = remove_path(&to_translate, path);
        }
        ignored = extract_paths(&target.document, &paths);
        skipped = paths.iter().map(ToString::to_string).collect();
    }

    let plan = SyncPlan {
        subset: baseline.subset_document(),
        to_translate,
        ignored,
        skipped,
    };
    info!(
        source_lang = %source.lang,
        target_lang = %target.lang,
        kept = entry_count(&plan.subset),
        to_translate = entry_count(&plan.to_translate),
        skipped = plan.skipped.len(),
        "sync planned"
    );
    Ok(plan)
}

/// Paths of `document` the rule selects. Descent stops at a match.
fn skip_paths(rule: &dyn SkipRule, document: &Document) -> Vec<NodePath> {
    let mut paths = Vec::new();
    visit_object_paths(document, |path, value| {
        let context = SkipContext { value, document };
        if rule.skip(&path.to_string(), &context) {
            paths.push(path.clone());
            Visit::SkipChildren
        } else {
            Visit::Descend
        }
    });
    paths
}

fn require_object(document: &Document, which: &'static str) -> SyncResult<()> {
    if document.is_object() {
        Ok(())
    } else {
        Err(SyncError::InvalidDocument(which))
    }
}

fn entry_count(document: &Document) -> usize {
    document.as_object().map_or(0, |m| m.len())
}
