//! Domain layer for the profile service
//!
//! This module contains the core models, ports, and error taxonomy.
//! Nothing in here performs I/O.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{FetchError, FetchResult, UpstreamError, UpstreamResult};
