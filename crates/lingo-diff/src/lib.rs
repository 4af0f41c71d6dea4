//! Structural diff engine for Lingo.
//!
//! Compares documents by *shape* (container kind, key set, array length)
//! and, where a caller asks for it, by leaf value. The results drive both
//! translation validation and locale synchronization.
//!
//! # Key Items
//!
//! - [`equal_structure`]: Recursive shape equality with a leaf predicate
//! - [`patch`] / [`Patch`]: Top-level partition of matching and missing entries
//! - [`tree_diff`] / [`DiffMode`]: Matching or mismatching sub-tree of a target
//! - [`leaf_paths`] / [`node_paths`] / [`NodePath`]: Dot-joined document paths

pub mod patch;
pub mod path;
pub mod structure;
pub mod tree_diff;

pub use patch::{patch, Patch};
pub use path::{
    extract_paths, get_path, leaf_paths, node_paths, remove_path, visit_object_paths, NodePath,
    PathSegment, Visit,
};
pub use structure::{equal_structure, same_kind, strict_value, truthy_eq};
pub use tree_diff::{tree_diff, DiffMode};
