//! Infrastructure layer module
//!
//! External integrations and wiring:
//! - Upstream REST client and aggregating provider (reqwest)
//! - Configuration management (figment)
//! - HTTP routes (axum)
//! - Composition root
//!
//! Infrastructure implementations satisfy the port traits defined in the
//! domain layer.

pub mod config;
pub mod http;
pub mod setup;
pub mod upstream;
