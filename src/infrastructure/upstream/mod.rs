//! Upstream JSONPlaceholder integration.

pub mod client;
pub mod provider;

pub use client::UpstreamClient;
pub use provider::JsonPlaceholderProfileProvider;
