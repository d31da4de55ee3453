//! Configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Upstream base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("Upstream relative path cannot be empty: {0}")]
    EmptyRelativePath(&'static str),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid cache max_entries: {0}. Must be at least 1")]
    InvalidMaxEntries(u64),

    #[error("Invalid cache ttl_seconds: {0}. Must be at least 1")]
    InvalidTtl(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `profile-service.yaml` in the working directory (optional)
    /// 3. Environment variables (`PROFILE_SERVICE_*` prefix, `__` nesting)
    ///
    /// # Errors
    ///
    /// Fails on unreadable/unparsable sources or a failed [`validate`](Self::validate).
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("profile-service.yaml"))
            .merge(Env::prefixed("PROFILE_SERVICE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable/unparsable file or a failed validation.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    ///
    /// # Errors
    ///
    /// Returns the first constraint violated.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.upstream.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if config.upstream.users_relative_path.trim().is_empty() {
            return Err(ConfigError::EmptyRelativePath("users_relative_path"));
        }
        if config.upstream.posts_relative_path.trim().is_empty() {
            return Err(ConfigError::EmptyRelativePath("posts_relative_path"));
        }
        if config.upstream.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.upstream.timeout_secs));
        }
        if config.cache.max_entries == 0 {
            return Err(ConfigError::InvalidMaxEntries(config.cache.max_entries));
        }
        if config.cache.ttl_seconds == 0 {
            return Err(ConfigError::InvalidTtl(config.cache.ttl_seconds));
        }

        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }

        Ok(())
    }
}
