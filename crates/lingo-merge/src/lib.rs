//! Merge engine for Lingo.
//!
//! Combines several partial documents into one. Layers are applied in
//! order and later layers take precedence: objects are merged key by key,
//! recursively; any other pair of values is resolved by taking the later
//! value whole. Arrays are never merged element-wise.
//!
//! Key order follows first appearance: keys of the first layer keep their
//! positions, and keys introduced by later layers are appended in the order
//! those layers list them.

use lingo_types::{Document, Entries};
use serde_json::Value;

/// Merge `layers` left to right; later layers win on conflicts.
///
/// An empty slice yields an empty object.
pub fn deep_merge(layers: &[&Document]) -> Document {
    layers
        .iter()
        .fold(Value::Object(Entries::new()), |acc, layer| merge_pair(acc, layer))
}

/// Merge `overlay` on top of `base`.
pub fn merge_pair(base: Document, overlay: &Document) -> Document {
    match (base, overlay) {
        (Value::Object(mut merged), Value::Object(top)) => {
            for (key, value) in top {
                // Replace in place so existing keys keep their position.
                match merged.get_mut(key) {
                    Some(slot) => {
                        let existing = std::mem::take(slot);
                        *slot = merge_pair(existing, value);
                    }
                    None => {
                        merged.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Object(merged)
        }
        (_, overlay) => overlay.clone(),
    }
}
