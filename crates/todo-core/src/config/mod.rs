//! Configuration management for todo.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `todo.toml` file
//! 3. User config `~/.config/todo/config.toml`
//! 4. Built-in defaults (lowest priority)
//!
//! Command-line flags are layered on top by the binary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage backend configuration.
    pub storage: StorageConfig,

    /// Logging configuration.
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./todo.toml` (project local)
    /// 2. `~/.config/todo/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides are applied in every case.
    pub fn load() -> Result<Self, ConfigError> {
        // Try project-local config first
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        // Try user config
        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Path of the per-user config file, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(USER_CONFIG_FILE))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = lookup(ENV_BACKEND) {
            self.storage.backend = backend.parse()?;
        }
        if let Some(file) = lookup(ENV_FILE) {
            if !file.trim().is_empty() {
                self.storage.file = Some(PathBuf::from(file));
            }
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log.level = level;
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Which storage backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Backend {
    /// Todos live only as long as the process.
    Memory,
    /// Todos are persisted to a JSON file.
    #[default]
    File,
}

impl Backend {
    /// Returns the config name of the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::File => "file",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Backend::Memory),
            "file" => Ok(Backend::File),
            other => Err(ConfigError::Invalid(format!(
                "unknown storage backend `{other}`; expected memory|file"
            ))),
        }
    }
}

impl TryFrom<String> for Backend {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend to construct (default: "file").
    pub backend: Backend,

    /// Todo file for the file backend.
    /// If not set, uses `<data_dir>/todo/todos.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            file: None, // Use platform data dir
        }
    }
}

impl StorageConfig {
    /// Get the todo file path, falling back to the platform data directory.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
                .join(DEFAULT_TODO_FILE)
        })
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level or filter directive for diagnostics on stderr.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
