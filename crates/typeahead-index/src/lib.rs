//! Word indexes backing the typeahead engine.
//!
//! Both structures are built once by inserting every vocabulary word and are
//! read-only afterwards. Nodes live in a flat `Vec` and refer to their children
//! by index; no node refers back to its parent.
//!
//! - [`trie`] -- prefix index for exact completions
//! - [`bktree`] -- metric tree for edit-distance corrections

pub mod bktree;
pub mod trie;

pub use bktree::BkTree;
pub use trie::Trie;

/// Index of a node within an index's node arena.
pub(crate) type NodeId = u32;
