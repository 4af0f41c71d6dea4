//! Document paths.
//!
//! A path is the sequence of object keys and array indices leading from the
//! root to a node. Its display form joins segments with `.`, e.g.
//! `menu.items.0.label`.

use std::fmt;

use lingo_types::{Entries, NodeKind};
use serde_json::Value;

/// One step of a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Path from the document root to a node. The empty path is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<PathSegment>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path of object keys.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(|k| PathSegment::Key(k.into())).collect())
    }

    /// Parse a dot-joined path. Every segment is read as an object key.
    pub fn parse_keys(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self::from_keys(path.split('.'))
    }

    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_owned()));
        Self(segments)
    }

    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Dot-joined paths of every leaf, depth-first in document order.
///
/// Empty objects and arrays contain no leaves and contribute no path.
pub fn leaf_paths(document: &Value) -> Vec<String> {
    let mut out = Vec::new();
    collect_paths(document, &NodePath::root(), false, &mut out);
    out
}

/// Dot-joined paths of every node below the root, depth-first, parents
/// before children.
pub fn node_paths(document: &Value) -> Vec<String> {
    let mut out = Vec::new();
    collect_paths(document, &NodePath::root(), true, &mut out);
    out
}

fn collect_paths(value: &Value, path: &NodePath, all_nodes: bool, out: &mut Vec<String>) {
    if !path.is_root() && (all_nodes || !NodeKind::of(value).is_container()) {
        out.push(path.to_string());
    }
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_paths(child, &path.child_key(key), all_nodes, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_paths(child, &path.child_index(index), all_nodes, out);
            }
        }
        _ => {}
    }
}

/// Visitor decision for [`visit_object_paths`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Continue into the node's children.
    Descend,
    /// Do not visit the node's children.
    SkipChildren,
}

/// Visit every node reachable through object keys, depth-first.
///
/// Arrays are visited as single nodes; their elements are not. The root is
/// not visited.
pub fn visit_object_paths<F>(document: &Value, mut visitor: F)
where
    F: FnMut(&NodePath, &Value) -> Visit,
{
    visit_inner(document, &NodePath::root(), &mut visitor);
}

fn visit_inner<F>(value: &Value, path: &NodePath, visitor: &mut F)
where
    F: FnMut(&NodePath, &Value) -> Visit,
{
    let Value::Object(map) = value else {
        return;
    };
    for (key, child) in map {
        let child_path = path.child_key(key);
        if visitor(&child_path, child) == Visit::Descend {
            visit_inner(child, &child_path, visitor);
        }
    }
}

/// Look up the node at `path`.
pub fn get_path<'a>(document: &'a Value, path: &NodePath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(document, |node, segment| match (segment, node) {
            (PathSegment::Key(key), Value::Object(map)) => map.get(key),
            (PathSegment::Index(index), Value::Array(items)) => items.get(*index),
            _ => None,
        })
}

/// Copy of `document` without the node at `path`.
///
/// Ancestors left empty by the removal are removed as well; the root is
/// kept, as an empty container if necessary. A path that does not exist
/// leaves the document unchanged.
pub fn remove_path(document: &Value, path: &NodePath) -> Value {
    remove_segments(document, path.segments()).unwrap_or_else(|| match document {
        Value::Array(_) => Value::Array(Vec::new()),
        _ => Value::Object(Entries::new()),
    })
}

fn remove_segments(value: &Value, segments: &[PathSegment]) -> Option<Value> {
    let Some((head, rest)) = segments.split_first() else {
        return None;
    };
    match (head, value) {
        (PathSegment::Key(key), Value::Object(map)) if map.contains_key(key) => {
            let kept: Entries = map
                .iter()
                .filter_map(|(k, v)| {
                    if k == key {
                        remove_segments(v, rest).map(|child| (k.clone(), child))
                    } else {
                        Some((k.clone(), v.clone()))
                    }
                })
                .collect();
            (!kept.is_empty()).then_some(Value::Object(kept))
        }
        (PathSegment::Index(index), Value::Array(items)) if *index < items.len() => {
            let kept: Vec<Value> = items
                .iter()
                .enumerate()
                .filter_map(|(i, v)| {
                    if i == *index {
                        remove_segments(v, rest)
                    } else {
                        Some(v.clone())
                    }
                })
                .collect();
            (!kept.is_empty()).then_some(Value::Array(kept))
        }
        _ => Some(value.clone()),
    }
}

/// Build a new object holding the subtrees of `document` found at `paths`,
/// each placed at its original path.
///
/// Only key paths can be extracted; paths through arrays and paths that do
/// not exist in `document` are ignored.
pub fn extract_paths(document: &Value, paths: &[NodePath]) -> Value {
    let mut out = Value::Object(Entries::new());
    for path in paths {
        let through_array = path
            .segments()
            .iter()
            .any(|segment| matches!(segment, PathSegment::Index(_)));
        if through_array {
            continue;
        }
        if let Some(found) = get_path(document, path) {
            insert_keys(&mut out, path.segments(), found.clone());
        }
    }
    out
}

fn insert_keys(node: &mut Value, segments: &[PathSegment], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *node = value;
        return;
    };
    let PathSegment::Key(key) = head else {
        return;
    };
    if !node.is_object() {
        *node = Value::Object(Entries::new());
    }
    if let Value::Object(map) = node {
        let child = map.entry(key.clone()).or_insert(Value::Null);
        insert_keys(child, rest, value);
    }
}
