//! Data structures for tstree.
//!
//! The ternary search tree is the crate's single in-memory index. It is a
//! plain owned structure: no unsafe code, no interior mutability, and no
//! internal locking.

pub mod ternary_search_tree;

// Re-export common data structures
pub use ternary_search_tree::{Node, TernarySearchTree};
