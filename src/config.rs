//! # Configuration Module
//!
//! This module provides configuration support for renotice, allowing the
//! notice template, the tag literals, and the template variables to live in a
//! project file instead of the command line.
//!
//! Configuration can be specified in a `.renotice.toml` file or via the
//! `RENOTICE_CONFIG` environment variable. CLI flags override config values.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".renotice.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "RENOTICE_CONFIG";

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// Both an inline notice and a notice file were configured.
  #[error("Config file '{path}' sets both 'notice' and 'notice-file'; choose one")]
  ConflictingNoticeSource { path: PathBuf },
}

/// Main configuration struct for renotice.
///
/// This struct is loaded from a `.renotice.toml` file and contains all
/// user-configurable options for the notice template, the tag literals, and
/// the template variables.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
  /// Inline notice template. Mutually exclusive with `notice-file`.
  #[serde(default)]
  pub notice: Option<String>,

  /// Path to a notice template file, resolved against the invocation
  /// directory. Mutually exclusive with `notice`.
  #[serde(default, rename = "notice-file")]
  pub notice_file: Option<PathBuf>,

  /// Open-tag literal for markup tag regions.
  #[serde(default, rename = "open-tag")]
  pub open_tag: Option<String>,

  /// Close-tag literal for markup tag regions.
  #[serde(default, rename = "close-tag")]
  pub close_tag: Option<String>,

  /// Template variables (package name, version, repository URL, author, ...).
  #[serde(default)]
  pub vars: HashMap<String, String>,
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read or
  /// parsed.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    if config.notice.is_some() && config.notice_file.is_some() {
      return Err(ConfigError::ConflictingNoticeSource {
        path: path.to_path_buf(),
      });
    }

    verbose_log!("Loaded {} template variables from config", config.vars.len());

    Ok(config)
  }
}

/// Resolve and load the configuration, if any.
///
/// Resolution order:
/// 1. If `no_config` is set, no config is loaded.
/// 2. An explicitly passed path is always used (and must load successfully).
/// 3. The `RENOTICE_CONFIG` environment variable, if set.
/// 4. `.renotice.toml` in the current directory, if present.
///
/// # Returns
///
/// `Some(Config)` if a config was found and loaded, `None` otherwise.
pub fn load_config(explicit_path: Option<&Path>, no_config: bool) -> Result<Option<Config>, ConfigError> {
  if no_config {
    verbose_log!("Config loading disabled via --no-config");
    return Ok(None);
  }

  if let Some(path) = explicit_path {
    return Config::load(path).map(Some);
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    return Config::load(Path::new(&env_path)).map(Some);
  }

  let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
  if default_path.is_file() {
    return Config::load(default_path).map(Some);
  }

  Ok(None)
}
