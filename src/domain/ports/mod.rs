//! Domain ports (trait boundaries).
//!
//! Infrastructure implementations satisfy these traits; adapters decorate
//! them.

pub mod profile_provider;

pub use profile_provider::ProfileProvider;
