//! Query configuration module.
//!
//! Settings that shape how lookups and completions are reported.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line
    #[default]
    Plain,
    /// A single JSON document
    Json,
}

/// Query configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryConfig {
    /// Default maximum number of completions returned for a prefix
    pub max_results: usize,

    /// Output format for command results
    pub output: OutputFormat,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_results: 50,
            output: OutputFormat::default(),
        }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "query.max_results".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
