//! In-memory caching layer for resolved profiles.
//!
//! Uses `moka` for TTL-based concurrent caching. Wraps the
//! [`ProfileProvider`](crate::domain::ports::ProfileProvider) port as a
//! decorator.

pub mod cached_profile_provider;

pub use cached_profile_provider::CachedProfileProvider;
