//! Adapters decorating domain ports.

pub mod cache;
