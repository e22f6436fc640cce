//! Configuration for log stores

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::LogError;

/// Default backing file for a new store
pub const DEFAULT_LOG_FILE: &str = "./app.log";

/// Default rotation threshold (1 MiB)
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 1_048_576;

/// Construction-time configuration of a log store lineage
///
/// Both values are fixed once a store is created and carried unchanged to
/// every store derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStoreConfig {
    /// Path of the backing log file
    #[serde(default = "default_log_file_path")]
    pub log_file_path: PathBuf,

    /// Size in bytes above which the file is rotated before the next write
    #[serde(default = "default_max_file_size_bytes")]
    pub max_file_size_bytes: u64,
}

fn default_log_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_max_file_size_bytes() -> u64 {
    DEFAULT_MAX_FILE_SIZE_BYTES
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_file_path(),
            max_file_size_bytes: default_max_file_size_bytes(),
        }
    }
}

impl LogStoreConfig {
    /// Create a configuration with an explicit path and threshold
    pub fn new(log_file_path: impl Into<PathBuf>, max_file_size_bytes: u64) -> Self {
        Self {
            log_file_path: log_file_path.into(),
            max_file_size_bytes,
        }
    }

    pub fn with_log_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file_path = path.into();
        self
    }

    pub fn with_max_file_size_bytes(mut self, max_file_size_bytes: u64) -> Self {
        self.max_file_size_bytes = max_file_size_bytes;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.max_file_size_bytes == 0 {
            return Err(LogError::InvalidConfig(
                "max_file_size_bytes must be positive".to_string(),
            ));
        }
        if self.log_file_path.as_os_str().is_empty() {
            return Err(LogError::InvalidConfig(
                "log_file_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            Self::default()
        };
        config.validate().context("Invalid config file")?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}
