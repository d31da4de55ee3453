//! Profile Service - User Profile Aggregation
//!
//! Fetches a user record and the user's posts from the JSONPlaceholder REST
//! API, merges them into a single profile, and serves the merge through a
//! bounded, time-limited cache.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, ports, and domain errors
//! - **Service Layer** (`services`): The query facade consumed by both binaries
//! - **Adapters** (`adapters`): Decorators over domain ports (caching)
//! - **Infrastructure Layer** (`infrastructure`): Upstream HTTP client,
//!   configuration, HTTP routes, composition root
//! - **CLI Layer** (`cli`): Command-line interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{FetchError, FetchResult, UpstreamError, UpstreamResult};
pub use domain::models::{
    CacheConfig, Config, LoggingConfig, Post, ServerConfig, UpstreamConfig, UserId, UserProfile,
    UserRecord,
};
pub use domain::ports::ProfileProvider;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::ProfileService;
