//! Rules that exclude parts of the target from synchronization.

use lingo_types::Document;
use serde_json::Value;

/// What a skip rule sees besides the path.
#[derive(Clone, Copy, Debug)]
pub struct SkipContext<'a> {
    /// The node at the path.
    pub value: &'a Value,
    /// The whole target document.
    pub document: &'a Document,
}

/// Decides whether the target node at a dot-joined path is left alone.
///
/// A matching node is kept verbatim from the target and none of its
/// descendants are asked about. Only object keys are offered: an array is
/// judged as a single node and its elements are never passed to the rule,
/// so a path like `list.0` never reaches it.
pub trait SkipRule: Send + Sync {
    fn skip(&self, path: &str, context: &SkipContext<'_>) -> bool;
}

impl<F> SkipRule for F
where
    F: Fn(&str, &SkipContext<'_>) -> bool + Send + Sync,
{
    fn skip(&self, path: &str, context: &SkipContext<'_>) -> bool {
        self(path, context)
    }
}

/// Skips every path equal to, or nested under, one of the prefixes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathPrefixSkip {
    prefixes: Vec<String>,
}

impl PathPrefixSkip {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
        })
    }
}

impl SkipRule for PathPrefixSkip {
    fn skip(&self, path: &str, _context: &SkipContext<'_>) -> bool {
        self.matches(path)
    }
}
