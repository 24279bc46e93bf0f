//! Configuration module for tstree.
//!
//! This module provides a layered configuration system: built-in defaults,
//! then an optional file (TOML, YAML, JSON), then environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub mod dictionary;
pub mod query;

pub use dictionary::DictionaryConfig;
pub use query::{OutputFormat, QueryConfig};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TSTREE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for tstree.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TstreeConfig {
    /// Word list source and parsing
    pub dictionary: DictionaryConfig,

    /// Lookup and completion output
    pub query: QueryConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for TstreeConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.dictionary.validate()?;
        self.query.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for tstree.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file, and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(TstreeConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<TstreeConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&TstreeConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            let name = path
                .to_str()
                .ok_or_else(|| ConfigError::InvalidPath(path.clone()))?;

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::new(name, format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let tstree_config: TstreeConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        tstree_config.validate()?;

        Ok(tstree_config)
    }
}

/// Serializes `config` as pretty TOML, the format `gen-config` writes.
pub fn to_toml(config: &TstreeConfig) -> ConfigResult<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<TstreeConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    pub fn new(config: TstreeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &TstreeConfig {
        &self.config
    }
}

/// Process-wide configuration.
static GLOBAL_CONFIG: OnceCell<RwLock<GlobalConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// Only the first call takes effect; later calls are logged and ignored.
pub fn init_global_config(config: TstreeConfig) {
    if GLOBAL_CONFIG.set(RwLock::new(GlobalConfig::new(config))).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration.
///
/// Falls back to built-in defaults when [`init_global_config`] was never called.
pub fn get_global_config() -> GlobalConfig {
    GLOBAL_CONFIG
        .get_or_init(|| RwLock::new(GlobalConfig::new(TstreeConfig::default())))
        .read()
        .clone()
}
