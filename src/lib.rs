//! tstree library
//!
//! A ternary search tree mapping strings to arbitrary payloads, with exact
//! lookup, balanced bulk construction, ordered traversal and prefix
//! completion, plus the word-list loading and configuration used by the
//! `tstree` command-line tool.
//!
//! # Architecture
//!
//! - [`data_structures`]: the tree itself; single-threaded, total operations
//! - [`dictionary`]: builds a tree from a newline-delimited word list
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: error types for the fallible outer layers

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for tstree.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

