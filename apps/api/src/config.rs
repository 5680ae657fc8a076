//! API server configuration

use std::env;

use anyhow::{bail, Context, Result};
use gamereview_shared_config::{CommonConfig, Environment, StorageConfig};

/// Default HTTP port
const DEFAULT_PORT: u16 = 4000;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Server port (default: 4000)
    pub port: u16,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// In production mode `STORAGE_BACKEND` must be set explicitly, so a
    /// deployment never silently falls back to in-memory storage. In
    /// development/staging the in-memory default is used.
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load config")?;

        if common.environment.is_production() {
            Self::validate_storage_backend()?;
        }

        Ok(Self {
            common,

            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .context("Invalid PORT value")?,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Validate that STORAGE_BACKEND is explicitly set
    fn validate_storage_backend() -> Result<()> {
        match env::var("STORAGE_BACKEND") {
            Ok(backend) if !backend.trim().is_empty() => Ok(()),
            _ => {
                bail!(
                    "STORAGE_BACKEND environment variable is required in production. \
                     Set it to 'file' to persist data, or 'memory' to opt into ephemeral storage."
                );
            }
        }
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.common.storage
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}
