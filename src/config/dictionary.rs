//! Dictionary configuration module.
//!
//! Controls where the word list comes from and how its lines become keys.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Newline-delimited word list to load (None when supplied on the command line)
    pub path: Option<PathBuf>,

    /// Build the tree with balanced bulk insertion instead of line-by-line inserts
    pub balanced: bool,

    /// Strip leading and trailing whitespace from each line
    pub trim_whitespace: bool,

    /// Lines starting with this prefix are skipped
    pub comment_prefix: Option<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            balanced: true,
            trim_whitespace: true,
            comment_prefix: None,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.comment_prefix.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "comment_prefix must not be empty when set".to_string(),
            ));
        }

        if self.path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError(
                "dictionary path must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }
}
