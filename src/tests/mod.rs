//! Test modules for tstree.
//!
//! Crate-internal suites for the layers around the tree:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Dictionary loading from files
//!
//! The tree's own unit and property tests live next to it in
//! `data_structures::ternary_search_tree::tests`.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, TestFixture};
