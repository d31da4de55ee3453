//! Composition root.
//!
//! Builds the provider chain explicitly: upstream client, aggregating
//! provider, optional cache decorator, and finally the facade handed to
//! the CLI and the HTTP router. No global registry.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::adapters::cache::CachedProfileProvider;
use crate::domain::models::Config;
use crate::domain::ports::ProfileProvider;
use crate::infrastructure::upstream::{JsonPlaceholderProfileProvider, UpstreamClient};
use crate::services::ProfileService;

/// Assemble the profile service from configuration.
///
/// # Errors
///
/// Fails when the upstream HTTP client cannot be constructed.
pub fn build_profile_service(config: &Config) -> Result<ProfileService> {
    debug!(
        base_url = %config.upstream.base_url,
        cache_enabled = config.cache.enabled,
        "assembling profile service"
    );

    let client =
        UpstreamClient::new(&config.upstream).context("Failed to build upstream client")?;
    let provider = Arc::new(JsonPlaceholderProfileProvider::new(client));

    let provider: Arc<dyn ProfileProvider> = if config.cache.enabled {
        Arc::new(CachedProfileProvider::with_policy(
            provider,
            config.cache.max_entries,
            Duration::from_secs(config.cache.ttl_seconds),
        ))
    } else {
        provider
    };

    Ok(ProfileService::new(provider))
}
