//! Parsing generator replies into documents.

use lingo_types::{Document, Entries, NodeKind};
use serde_json::Value;

/// Parse a reply as an object document.
///
/// Surrounding whitespace and a markdown code fence (with or without a
/// language tag) are removed first. Anything other than a JSON object is
/// rejected with a description of the problem.
pub fn parse_reply(text: &str) -> Result<Entries, String> {
    let body = strip_code_fence(text.trim());
    let value: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    match value {
        Value::Object(entries) => Ok(entries),
        other => Err(format!("expected a JSON object, got {}", NodeKind::of(&other))),
    }
}

/// Reorder `reply` to follow the key order of `original`.
///
/// Generators may return keys in any order. Keys shared with `original`
/// take its order, recursively through objects and array elements; keys
/// only the reply has follow in reply order. Values are never changed.
pub fn align_reply(original: &Document, reply: Document) -> Document {
    match (original, reply) {
        (Value::Object(source), Value::Object(mut reply)) => {
            let mut aligned = Entries::new();
            for (key, source_value) in source {
                if let Some(slot) = reply.get_mut(key) {
                    let value = std::mem::take(slot);
                    aligned.insert(key.clone(), align_reply(source_value, value));
                }
            }
            for (key, value) in reply {
                if !aligned.contains_key(&key) {
                    aligned.insert(key, value);
                }
            }
            Value::Object(aligned)
        }
        (Value::Array(source), Value::Array(items)) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match source.get(i) {
                    Some(source_item) => align_reply(source_item, item),
                    None => item,
                })
                .collect(),
        ),
        (_, reply) => reply,
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_object() {
        let entries = parse_reply(r#"  {"a": "b"} "#).unwrap();
        assert_eq!(Value::Object(entries), json!({"a": "b"}));
    }

    #[test]
    fn fenced_object() {
        let entries = parse_reply("```json\n{\"a\": 1}\n```").unwrap();
        assert_eq!(Value::Object(entries), json!({"a": 1}));
        let entries = parse_reply("```\n{\"a\": 2}\n```\n").unwrap();
        assert_eq!(Value::Object(entries), json!({"a": 2}));
    }

    #[test]
    fn rejects_non_objects() {
        let err = parse_reply("[1, 2]").unwrap_err();
        assert!(err.contains("array"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_reply("Sure! Here is your translation").is_err());
        assert!(parse_reply("").is_err());
    }

    fn keys(doc: &Value) -> Vec<&str> {
        doc.as_object().unwrap().keys().map(String::as_str).collect()
    }

    #[test]
    fn align_restores_source_order() {
        let original = json!({"a": "x", "menu": {"open": "o", "close": "c"}, "b": "y"});
        let reply = json!({"b": "Y", "menu": {"close": "C", "open": "O"}, "a": "X"});
        let aligned = align_reply(&original, reply);
        assert_eq!(keys(&aligned), vec!["a", "menu", "b"]);
        assert_eq!(keys(&aligned["menu"]), vec!["open", "close"]);
        assert_eq!(aligned["menu"]["open"], "O");
    }

    #[test]
    fn align_appends_extra_keys_and_aligns_array_items() {
        let original = json!({"a": 1, "l": [{"x": 1, "y": 2}]});
        let reply = json!({"extra": true, "l": [{"y": 20, "x": 10}, {"z": 3}], "a": 2});
        let aligned = align_reply(&original, reply);
        assert_eq!(keys(&aligned), vec!["a", "l", "extra"]);
        assert_eq!(keys(&aligned["l"][0]), vec!["x", "y"]);
        assert_eq!(aligned["l"][1], json!({"z": 3}));
    }

    #[test]
    fn align_leaves_mismatched_kinds_alone() {
        let aligned = align_reply(&json!({"a": {"b": 1}}), json!({"a": "flat"}));
        assert_eq!(aligned, json!({"a": "flat"}));
    }

    #[test]
    fn keeps_reply_key_order() {
        let entries = parse_reply(r#"{"z": 1, "a": 2}"#).unwrap();
        let keys: Vec<&String> = entries.keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
