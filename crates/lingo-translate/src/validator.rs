//! Structural validation of translations and self-correction requests.
//!
//! A translation is expected to change leaf values but never the set of
//! leaf paths. Both directions are checked: paths of the source that the
//! translation lost, and paths the translation invented. Leaves are
//! compared by truthiness only, so an emptied string counts as lost.

use std::sync::Arc;

use lingo_diff::{leaf_paths, tree_diff, truthy_eq, DiffMode};
use lingo_processor::DocumentValidator;
use lingo_types::{Document, Message, ValidationResult};

/// Leaf paths that differ between a source and its translation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathComparison {
    /// Present in the source, absent (or emptied) in the translation.
    pub missed: Vec<String>,
    /// Present in the translation, absent from the source.
    pub added: Vec<String>,
}

impl PathComparison {
    pub fn is_clean(&self) -> bool {
        self.missed.is_empty() && self.added.is_empty()
    }

    /// One-line description of the mismatch.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.missed.is_empty() {
            parts.push(format!("missed paths: {}", self.missed.join(", ")));
        }
        if !self.added.is_empty() {
            parts.push(format!("added paths: {}", self.added.join(", ")));
        }
        parts.join("; ")
    }
}

/// Compare the leaf paths of `source` and `transformed`.
pub fn compare_leaf_paths(source: &Document, transformed: &Document) -> PathComparison {
    let missed = tree_diff(transformed, source, DiffMode::Diff, &truthy_eq)
        .map(|diff| leaf_paths(&diff))
        .unwrap_or_default();
    let added = tree_diff(source, transformed, DiffMode::Diff, &truthy_eq)
        .map(|diff| leaf_paths(&diff))
        .unwrap_or_default();
    PathComparison { missed, added }
}

/// Validate without asking for a correction.
pub fn validate(source: &Document, transformed: &Document) -> ValidationResult {
    let comparison = compare_leaf_paths(source, transformed);
    if comparison.is_clean() {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(comparison.describe())
    }
}

/// What a correction callback gets to see. Owned, so callbacks may keep it.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrectionContext {
    /// The source document the failed reply was meant to translate.
    pub document: Document,
    pub from_lang: String,
    pub to_lang: String,
}

/// Produces follow-up messages asking the generator to fix its last reply.
pub trait CorrectionBuilder: Send + Sync {
    fn fix(&self, missed: &[String], added: &[String], context: CorrectionContext) -> Vec<Message>;
}

impl<F> CorrectionBuilder for F
where
    F: Fn(&[String], &[String], CorrectionContext) -> Vec<Message> + Send + Sync,
{
    fn fix(&self, missed: &[String], added: &[String], context: CorrectionContext) -> Vec<Message> {
        self(missed, added, context)
    }
}

/// Default correction: list the offending paths and restate the task.
pub struct PathListCorrection;

impl CorrectionBuilder for PathListCorrection {
    fn fix(&self, missed: &[String], added: &[String], context: CorrectionContext) -> Vec<Message> {
        let mut text = String::from(
            "Your previous reply does not have the same keys as the source object.",
        );
        if !missed.is_empty() {
            text.push_str(&format!("\nMissing or empty keys: {}", missed.join(", ")));
        }
        if !added.is_empty() {
            text.push_str(&format!("\nUnexpected keys: {}", added.join(", ")));
        }
        text.push_str(&format!(
            "\nReply again with the complete {} translation of the source as a single JSON object \
             with exactly the same keys.",
            context.to_lang
        ));
        vec![Message::user(text)]
    }
}

/// Translation validator usable as a chunk or whole-document check.
#[derive(Clone)]
pub struct TranslationValidator {
    from_lang: String,
    to_lang: String,
    correction: Option<Arc<dyn CorrectionBuilder>>,
}

impl TranslationValidator {
    pub fn new(from_lang: impl Into<String>, to_lang: impl Into<String>) -> Self {
        Self {
            from_lang: from_lang.into(),
            to_lang: to_lang.into(),
            correction: None,
        }
    }

    pub fn with_correction(mut self, correction: Option<Arc<dyn CorrectionBuilder>>) -> Self {
        self.correction = correction;
        self
    }
}

impl DocumentValidator for TranslationValidator {
    fn validate(&self, original: &Document, transformed: &Document) -> ValidationResult {
        let comparison = compare_leaf_paths(original, transformed);
        if comparison.is_clean() {
            return ValidationResult::Valid;
        }
        let correction_request = self.correction.as_ref().map(|builder| {
            builder.fix(
                &comparison.missed,
                &comparison.added,
                CorrectionContext {
                    document: original.clone(),
                    from_lang: self.from_lang.clone(),
                    to_lang: self.to_lang.clone(),
                },
            )
        });
        ValidationResult::Invalid {
            reason: comparison.describe(),
            correction_request,
        }
    }
}
