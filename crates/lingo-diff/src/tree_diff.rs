//! Tree diff: restrict a target document to the nodes that match, or
//! mismatch, the corresponding nodes of a source document.
//!
//! The walk is depth-first over the target and builds a new tree; neither
//! input is modified. A target node whose source counterpart is absent or
//! of a different kind is a whole-subtree mismatch. Arrays are compared
//! element by element but reported whole: an array appears in the
//! intersection only if every element matches, and in the diff otherwise.

use lingo_types::{Entries, NodeKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which side of the comparison to keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Keep the target nodes that match the source.
    Intersection,
    /// Keep the target nodes that do not match the source.
    Diff,
}

/// Compute the matching or mismatching sub-tree of `target`.
///
/// `leaf_predicate(target_leaf, source_leaf)` decides whether two leaves
/// of the same kind match. Returns `None` when the result is empty: in
/// `Diff` mode a fully matching subtree collapses away entirely rather than
/// leaving an empty object behind.
pub fn tree_diff<P>(source: &Value, target: &Value, mode: DiffMode, leaf_predicate: &P) -> Option<Value>
where
    P: Fn(&Value, &Value) -> bool + ?Sized,
{
    walk(Some(source), target, mode, leaf_predicate)
}

fn walk<P>(source: Option<&Value>, target: &Value, mode: DiffMode, pred: &P) -> Option<Value>
where
    P: Fn(&Value, &Value) -> bool + ?Sized,
{
    match (source, target) {
        (Some(Value::Object(src)), Value::Object(tgt)) => {
            let kept: Entries = tgt
                .iter()
                .filter_map(|(key, tv)| {
                    walk(src.get(key), tv, mode, pred).map(|child| (key.clone(), child))
                })
                .collect();
            let keep = match mode {
                DiffMode::Intersection => !kept.is_empty() || tgt.is_empty(),
                DiffMode::Diff => !kept.is_empty(),
            };
            keep.then_some(Value::Object(kept))
        }
        (Some(Value::Array(src)), Value::Array(tgt)) => {
            let all_match = tgt
                .iter()
                .enumerate()
                .all(|(i, tv)| walk(src.get(i), tv, DiffMode::Diff, pred).is_none());
            select(mode, all_match, target)
        }
        (Some(src), tgt) if NodeKind::of(src) == NodeKind::of(tgt) => {
            select(mode, pred(tgt, src), target)
        }
        _ => select(mode, false, target),
    }
}

fn select(mode: DiffMode, matched: bool, target: &Value) -> Option<Value> {
    let keep = match mode {
        DiffMode::Intersection => matched,
        DiffMode::Diff => !matched,
    };
    keep.then(|| target.clone())
}
