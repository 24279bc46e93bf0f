//! Dictionary error module.
//!
//! This module defines error types that may occur while reading a word list
//! into a ternary search tree.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the dictionary file is missing.
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),

    /// Error when no dictionary source was configured.
    #[error("No dictionary configured; pass --dictionary or set dictionary.path")]
    NotConfigured,

    /// Error when the dictionary cannot be opened or read.
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        /// The dictionary being read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when a line is not valid UTF-8.
    #[error("Invalid UTF-8 on dictionary line {line}")]
    InvalidUtf8 {
        /// One-based line number
        line: usize,
    },
}
