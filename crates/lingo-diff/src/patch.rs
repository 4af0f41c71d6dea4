//! Top-level patch: which target entries already fit the source, and which
//! source entries still have to be produced.

use lingo_types::{Document, Entries};
use serde::Serialize;
use serde_json::Value;

use crate::structure::equal_structure;

/// The result of partitioning a source against a target.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Patch {
    /// Target entries whose structure matches the source entry, in target order.
    pub subset: Entries,
    /// Source entries whose key is absent from `subset`, in source order.
    pub superset: Entries,
}

impl Patch {
    /// Returns `true` if nothing in the source is missing from the target.
    pub fn is_complete(&self) -> bool {
        self.superset.is_empty()
    }

    /// `subset` as an object document.
    pub fn subset_document(&self) -> Document {
        Value::Object(self.subset.clone())
    }

    /// `superset` as an object document.
    pub fn superset_document(&self) -> Document {
        Value::Object(self.superset.clone())
    }
}

/// Partition the top-level entries of `source` and `target`.
///
/// A target key lands in `subset` iff the source has the same key and the
/// two values are structurally equal under `predicate`. Every source key
/// not in `subset` lands in `superset`. Target keys the source lacks are
/// dropped. Non-object operands are treated as empty objects.
pub fn patch<P>(source: &Value, target: &Value, predicate: &P) -> Patch
where
    P: Fn(&Value, &Value) -> bool + ?Sized,
{
    let empty = Entries::new();
    let source = source.as_object().unwrap_or(&empty);
    let target = target.as_object().unwrap_or(&empty);

    let subset: Entries = target
        .iter()
        .filter(|(key, tv)| {
            source
                .get(*key)
                .is_some_and(|sv| equal_structure(sv, tv, predicate))
        })
        .map(|(key, tv)| (key.clone(), tv.clone()))
        .collect();

    let superset: Entries = source
        .iter()
        .filter(|(key, _)| !subset.contains_key(*key))
        .map(|(key, sv)| (key.clone(), sv.clone()))
        .collect();

    Patch { subset, superset }
}
