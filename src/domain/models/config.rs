//! Service configuration model.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the profile service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Upstream REST API configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Profile cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpstreamConfig {
    /// Base URL of the upstream API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Relative path of the users resource
    #[serde(default = "default_users_relative_path")]
    pub users_relative_path: String,

    /// Relative path of the posts resource
    #[serde(default = "default_posts_relative_path")]
    pub posts_relative_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_users_relative_path() -> String {
    "users".to_string()
}

fn default_posts_relative_path() -> String {
    "posts".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_relative_path: default_users_relative_path(),
            posts_relative_path: default_posts_relative_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Profile cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Whether to cache resolved profiles at all
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// Maximum number of cached profiles
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,

    /// Entry time-to-live in seconds
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

const fn default_cache_enabled() -> bool {
    true
}

const fn default_max_entries() -> u64 {
    10
}

const fn default_ttl_seconds() -> u64 {
    15
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_entries: default_max_entries(),
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
