//! Greedy, order-preserving slicing of top-level entries.
//!
//! Each entry is serialized once as a `"key":value` piece. A chunk's
//! compact serialization is `{` + pieces joined by `,` + `}`, so the length
//! of a candidate chunk is known without re-serializing it.

use lingo_types::{as_entries, Document, Entries};
use serde_json::Value;
use tracing::debug;

use crate::chunk::Chunk;
use crate::error::ChunkResult;

/// Slice an object document into chunks.
///
/// - `max_length`: upper bound on a chunk's serialized length, in characters.
/// - `max_entries`: optional upper bound on entries per chunk.
///
/// Entries keep their original order within and across chunks. A single
/// entry whose serialization exceeds `max_length` becomes a chunk of its
/// own. No chunk is ever empty.
pub fn slice(
    document: &Document,
    max_length: usize,
    max_entries: Option<usize>,
) -> ChunkResult<Vec<Chunk>> {
    let entries = as_entries(document)?;
    slice_entries(entries, max_length, max_entries)
}

/// Slice an entry map into chunks. See [`slice`].
pub fn slice_entries(
    entries: &Entries,
    max_length: usize,
    max_entries: Option<usize>,
) -> ChunkResult<Vec<Chunk>> {
    let mut chunks = Vec::new();
    let mut pending = PendingChunk::default();

    for (key, value) in entries {
        let piece = serialize_entry(key, value)?;
        if !pending.is_empty() && !pending.accepts(&piece, max_length, max_entries) {
            let index = chunks.len();
            chunks.push(std::mem::take(&mut pending).close(index));
        }
        pending.push(key, value, piece);
    }

    if !pending.is_empty() {
        let index = chunks.len();
        chunks.push(pending.close(index));
    }

    debug!(
        entries = entries.len(),
        chunks = chunks.len(),
        max_length,
        ?max_entries,
        "document sliced"
    );
    Ok(chunks)
}

fn serialize_entry(key: &str, value: &Value) -> ChunkResult<String> {
    let key = serde_json::to_string(key)?;
    let value = serde_json::to_string(value)?;
    Ok(format!("{key}:{value}"))
}

/// Accumulator for the chunk currently being filled.
#[derive(Default)]
struct PendingChunk {
    entries: Entries,
    pieces: Vec<String>,
    /// Character count of the pieces plus separators, without braces.
    body_len: usize,
}

impl PendingChunk {
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn accepts(&self, piece: &str, max_length: usize, max_entries: Option<usize>) -> bool {
        let separator = usize::from(!self.pieces.is_empty());
        let candidate_len = 2 + self.body_len + separator + piece.chars().count();
        let under_count = max_entries.map_or(true, |limit| self.entries.len() < limit);
        candidate_len <= max_length && under_count
    }

    fn push(&mut self, key: &str, value: &Value, piece: String) {
        if !self.pieces.is_empty() {
            self.body_len += 1;
        }
        self.body_len += piece.chars().count();
        self.pieces.push(piece);
        self.entries.insert(key.to_owned(), value.clone());
    }

    fn close(self, index: usize) -> Chunk {
        Chunk {
            index,
            entries: self.entries,
            text: format!("{{{}}}", self.pieces.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChunkError;
    use lingo_types::NodeKind;
    use proptest::prelude::*;
    use serde_json::json;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }

    fn foo_bar_baz() -> Document {
        json!({"foo": "foo", "bar": "bar", "baz": "baz"})
    }

    #[test]
    fn tight_limit_gives_one_entry_per_chunk() {
        let chunks = slice(&foo_bar_baz(), 14, None).unwrap();
        assert_eq!(
            texts(&chunks),
            vec![r#"{"foo":"foo"}"#, r#"{"bar":"bar"}"#, r#"{"baz":"baz"}"#]
        );
    }

    #[test]
    fn limit_is_inclusive() {
        let chunks = slice(&foo_bar_baz(), 25, None).unwrap();
        assert_eq!(
            texts(&chunks),
            vec![r#"{"foo":"foo","bar":"bar"}"#, r#"{"baz":"baz"}"#]
        );
        assert_eq!(chunks[0].text_len(), 25);
    }

    #[test]
    fn limit_below_any_entry_never_yields_empty_chunks() {
        let chunks = slice(&foo_bar_baz(), 1, None).unwrap();
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn max_entries_caps_chunk_size() {
        let doc = json!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5});
        let chunks = slice(&doc, 10_000, Some(2)).unwrap();
        let sizes: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn chunk_indices_are_sequential() {
        let chunks = slice(&foo_bar_baz(), 1, None).unwrap();
        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn oversized_entry_is_emitted_alone() {
        let doc = json!({
            "short": "a",
            "long": "a very long value that exceeds the limit",
            "tail": "b"
        });
        let chunks = slice(&doc, 20, None).unwrap();
        assert_eq!(chunks.len(), 3);
        assert!(chunks[1].entries.contains_key("long"));
        assert!(chunks[1].text_len() > 20);
    }

    #[test]
    fn nested_values_stay_whole() {
        let doc = json!({"menu": {"open": "Open", "close": "Close"}, "title": "T"});
        let chunks = slice(&doc, 1_000, None).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].to_document(), doc);
    }

    #[test]
    fn empty_document_yields_no_chunks() {
        assert!(slice(&json!({}), 10, None).unwrap().is_empty());
    }

    #[test]
    fn non_object_input_is_rejected() {
        let err = slice(&json!(["a", "b"]), 10, None).unwrap_err();
        assert!(matches!(err, ChunkError::UnsupportedInputKind(NodeKind::Array)));
        let err = slice(&json!("text"), 10, None).unwrap_err();
        assert!(matches!(err, ChunkError::UnsupportedInputKind(NodeKind::String)));
    }

    #[test]
    fn text_matches_serde_serialization() {
        let doc = json!({"quote": "say \"hi\"", "n": 1.5, "list": [1, null, true]});
        let chunks = slice(&doc, 1_000, None).unwrap();
        assert_eq!(chunks[0].text, serde_json::to_string(&doc).unwrap());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // {"k":"ééé"} is 11 characters but 14 bytes.
        let doc = json!({"k": "ééé", "j": "x"});
        let chunks = slice(&doc, 11, None).unwrap();
        assert_eq!(chunks[0].text_len(), 11);
        assert_eq!(chunks.len(), 2);
    }

    fn arb_entries() -> impl Strategy<Value = Entries> {
        proptest::collection::vec(("[a-z]{1,6}", "[a-zA-Z ]{0,12}"), 0..24).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect::<Entries>()
        })
    }

    proptest! {
        #[test]
        fn slicing_is_complete_and_ordered(
            entries in arb_entries(),
            max_length in 1usize..80,
            max_entries in proptest::option::of(1usize..5),
        ) {
            let chunks = slice_entries(&entries, max_length, max_entries).unwrap();

            let rejoined: Vec<&String> = chunks.iter().flat_map(|c| c.entries.keys()).collect();
            let original: Vec<&String> = entries.keys().collect();
            prop_assert_eq!(rejoined, original);

            for chunk in &chunks {
                prop_assert!(!chunk.is_empty());
                if chunk.len() > 1 {
                    prop_assert!(chunk.text_len() <= max_length);
                    if let Some(limit) = max_entries {
                        prop_assert!(chunk.len() <= limit);
                    }
                }
                let reparsed: Document = serde_json::from_str(&chunk.text).unwrap();
                prop_assert_eq!(reparsed, chunk.to_document());
            }
        }
    }
}
