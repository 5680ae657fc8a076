//! Storage backend configuration types

use std::path::PathBuf;
use std::str::FromStr;

use crate::{get_env_or_default, parse_env, ConfigError, ConfigResult};

/// Default location of the JSON snapshot used by the file backend
pub const DEFAULT_DATA_FILE: &str = "data/gamereview.json";

/// Which storage adapter backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process memory only, lost on restart
    #[default]
    Memory,
    /// Process memory mirrored to a JSON snapshot on disk
    File,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            other => Err(ConfigError::InvalidValue(
                "STORAGE_BACKEND".to_string(),
                format!("unknown backend '{}', expected 'memory' or 'file'", other),
            )),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Selected backend
    pub backend: StorageBackend,

    /// Snapshot path, only read by the file backend
    pub data_file: PathBuf,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            backend: parse_env("STORAGE_BACKEND", StorageBackend::default())?,
            data_file: PathBuf::from(get_env_or_default("DATA_FILE", DEFAULT_DATA_FILE)),
        })
    }

    /// File-backed configuration at the given path (useful for testing)
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackend::File,
            data_file: path.into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}
