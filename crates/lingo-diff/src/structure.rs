//! Structural equality.
//!
//! Two documents are structurally equal when they have the same container
//! kinds, the same object key sets, the same array lengths, and every pair
//! of leaves satisfies a caller-chosen predicate. The predicate decides
//! whether values matter: [`same_kind`] ignores them, [`strict_value`]
//! compares them.

use lingo_types::{is_truthy, NodeKind};
use serde_json::Value;

/// Leaf predicate that ignores values. Kinds are already equal when it runs.
pub fn same_kind(_a: &Value, _b: &Value) -> bool {
    true
}

/// Leaf predicate that requires equal values.
pub fn strict_value(a: &Value, b: &Value) -> bool {
    a == b
}

/// Leaf predicate that treats two leaves as equal when both are truthy or
/// both are falsy. Translated values differ from their source, so only
/// presence is checked.
pub fn truthy_eq(a: &Value, b: &Value) -> bool {
    is_truthy(a) == is_truthy(b)
}

/// Recursively compare the shape of `a` and `b`.
///
/// Object key order is ignored. Arrays must have equal length and each
/// element pair must be structurally equal. `predicate` is applied to leaf
/// pairs of the same kind.
pub fn equal_structure<P>(a: &Value, b: &Value, predicate: &P) -> bool
where
    P: Fn(&Value, &Value) -> bool + ?Sized,
{
    match (a, b) {
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, lv)| {
                    right
                        .get(key)
                        .is_some_and(|rv| equal_structure(lv, rv, predicate))
                })
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(lv, rv)| equal_structure(lv, rv, predicate))
        }
        _ => NodeKind::of(a) == NodeKind::of(b) && predicate(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_are_ignored_by_default() {
        assert!(equal_structure(
            &json!({"a": 1, "b": "x"}),
            &json!({"a": 2, "b": "y"}),
            &same_kind
        ));
    }

    #[test]
    fn array_length_matters() {
        assert!(!equal_structure(&json!([1, 2, 3]), &json!([4, 5]), &same_kind));
        assert!(equal_structure(&json!([1, 2]), &json!([4, 5]), &same_kind));
    }

    #[test]
    fn array_elements_compared_by_shape() {
        assert!(equal_structure(
            &json!([{"a": 1}, "x"]),
            &json!([{"a": 9}, "y"]),
            &same_kind
        ));
        assert!(!equal_structure(
            &json!([{"a": 1}, "x"]),
            &json!([{"b": 1}, "x"]),
            &same_kind
        ));
    }

    #[test]
    fn key_order_is_irrelevant() {
        assert!(equal_structure(
            &json!({"a": 1, "b": 2}),
            &json!({"b": 2, "a": 1}),
            &strict_value
        ));
    }

    #[test]
    fn extra_or_missing_keys_mismatch() {
        assert!(!equal_structure(&json!({"a": 1}), &json!({"a": 1, "b": 2}), &same_kind));
        assert!(!equal_structure(&json!({"a": 1, "c": 2}), &json!({"a": 1, "b": 2}), &same_kind));
    }

    #[test]
    fn kind_changes_mismatch() {
        assert!(!equal_structure(&json!({"a": "1"}), &json!({"a": 1}), &same_kind));
        assert!(!equal_structure(&json!({"a": null}), &json!({"a": "x"}), &same_kind));
        assert!(!equal_structure(&json!({"a": {}}), &json!({"a": []}), &same_kind));
    }

    #[test]
    fn strict_predicate_compares_values() {
        assert!(!equal_structure(&json!({"a": "x"}), &json!({"a": "y"}), &strict_value));
        assert!(equal_structure(&json!({"a": {"b": [1]}}), &json!({"a": {"b": [1]}}), &strict_value));
    }

    #[test]
    fn truthy_predicate_checks_presence() {
        assert!(truthy_eq(&json!("hello"), &json!("hola")));
        assert!(truthy_eq(&json!(""), &json!("")));
        assert!(!truthy_eq(&json!("hello"), &json!("")));
    }

    #[test]
    fn closures_work_as_predicates() {
        let numbers_only = |a: &Value, b: &Value| a.is_number() && b.is_number();
        assert!(equal_structure(&json!([1, 2]), &json!([3, 4]), &numbers_only));
        assert!(!equal_structure(&json!(["1"]), &json!(["3"]), &numbers_only));
    }
}
