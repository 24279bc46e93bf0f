//! Configuration error module.
//!
//! Errors raised while layering, deserializing and validating the tstree
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the configuration path cannot be handed to the loader.
    #[error("Configuration path is not valid UTF-8: {0:?}")]
    InvalidPath(PathBuf),

    /// Error when the configuration file has an extension we cannot parse.
    #[error("Unsupported configuration format: {0:?}")]
    UnsupportedFormat(PathBuf),

    /// Error when parsing or deserializing the configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error when a configuration value is out of the valid range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// The key of the invalid value
        key: String,
        /// Description of the valid range
        message: String,
    },

    /// Error when the default configuration cannot be serialized.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
