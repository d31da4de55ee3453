//! Domain models.

pub mod config;
pub mod profile;

pub use config::{CacheConfig, Config, LoggingConfig, ServerConfig, UpstreamConfig};
pub use profile::{Post, UserId, UserProfile, UserRecord};
