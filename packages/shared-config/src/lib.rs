//! Shared configuration types for the game review services
//!
//! Everything read from the process environment that is not specific to one
//! binary lives here: the deployment [`Environment`], the storage backend
//! selection and the log filter.

mod environment;
mod error;
mod storage;

pub use environment::Environment;
pub use error::{ConfigError, ConfigResult};
pub use storage::{StorageBackend, StorageConfig, DEFAULT_DATA_FILE};

use std::env;

/// Settings every service reads the same way
#[derive(Debug, Clone)]
pub struct CommonConfig {
    pub storage: StorageConfig,
    pub environment: Environment,
    /// `RUST_LOG`, else `LOG_LEVEL`, else `info`
    pub log_level: String,
}

impl CommonConfig {
    /// Read the shared settings from the environment
    pub fn from_env() -> ConfigResult<Self> {
        let log_level = env::var("RUST_LOG")
            .or_else(|_| env::var("LOG_LEVEL"))
            .unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            storage: StorageConfig::from_env()?,
            environment: parse_env("ENVIRONMENT", Environment::default())?,
            log_level,
        })
    }
}

/// Value of `name`, or `default` when it is unset
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parse `name` with `FromStr`, or return `default` when it is unset
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };
    raw.parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue(name.to_string(), e.to_string()))
}
