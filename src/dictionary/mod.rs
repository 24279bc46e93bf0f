// Copyright (c) 2025 Tstree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list loading.
//!
//! Reads a newline-delimited word list into a [`TernarySearchTree`] whose
//! payload is each word's zero-based line number. Blank lines and comment
//! lines are skipped but still counted, so payloads always point back at
//! the line in the source file. A word listed twice keeps its last line.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tstree_lib::config::DictionaryConfig;
//! use tstree_lib::dictionary::read_dictionary;
//!
//! let words = Cursor::new("apple\n\nbanana\nband\n");
//! let tree = read_dictionary(words, &DictionaryConfig::default()).unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.get("banana"), Some(&2));
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::DictionaryConfig;
use crate::data_structures::TernarySearchTree;
pub use crate::error::dictionary::DictionaryError;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Label used in errors for sources that are not files.
const READER_SOURCE: &str = "<reader>";

/// Loads the dictionary named by `path`, falling back to `config.path`.
pub fn load_configured(
    path: Option<&Path>,
    config: &DictionaryConfig,
) -> DictionaryResult<TernarySearchTree<usize>> {
    let path = path
        .or(config.path.as_deref())
        .ok_or(DictionaryError::NotConfigured)?;
    load_dictionary(path, config)
}

/// Loads a word list file into a tree.
///
/// # Arguments
///
/// * `path` - Newline-delimited word list.
/// * `config` - Line handling and construction options.
///
/// # Returns
///
/// * `Ok(TernarySearchTree<usize>)` - Words mapped to their zero-based line numbers.
/// * `Err(DictionaryError)` - If the file is missing, unreadable, or not UTF-8.
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    config: &DictionaryConfig,
) -> DictionaryResult<TernarySearchTree<usize>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DictionaryError::NotFound(path.to_path_buf()),
        _ => DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    info!(path = %path.display(), balanced = config.balanced, "loading dictionary");
    build(BufReader::new(file), path, config)
}

/// Reads a word list from any buffered reader into a tree.
pub fn read_dictionary<R: BufRead>(
    reader: R,
    config: &DictionaryConfig,
) -> DictionaryResult<TernarySearchTree<usize>> {
    build(reader, Path::new(READER_SOURCE), config)
}

fn build<R: BufRead>(
    reader: R,
    source: &Path,
    config: &DictionaryConfig,
) -> DictionaryResult<TernarySearchTree<usize>> {
    let entries = read_entries(reader, source, config)?;
    let lines = entries.len();

    let tree = if config.balanced {
        entries.into_iter().collect()
    } else {
        let mut tree = TernarySearchTree::new();
        tree.extend(entries);
        tree
    };

    debug!(lines, entries = tree.len(), height = tree.height(), "dictionary loaded");
    Ok(tree)
}

/// Collects `(word, line_number)` pairs in file order.
fn read_entries<R: BufRead>(
    reader: R,
    source: &Path,
    config: &DictionaryConfig,
) -> DictionaryResult<Vec<(String, usize)>> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| match source_err.kind() {
            io::ErrorKind::InvalidData => DictionaryError::InvalidUtf8 { line: index + 1 },
            _ => DictionaryError::Io {
                path: PathBuf::from(source),
                source: source_err,
            },
        })?;

        let word = if config.trim_whitespace {
            line.trim()
        } else {
            line.as_str()
        };
        if word.is_empty() {
            continue;
        }
        if let Some(prefix) = config.comment_prefix.as_deref() {
            if word.starts_with(prefix) {
                continue;
            }
        }

        entries.push((word.to_owned(), index));
    }

    Ok(entries)
}
