//! Cached wrapper for [`ProfileProvider`] using a moka TTL cache.
//!
//! Successful lookups are memoized per user ID; failures are never cached,
//! so the next call for the same ID retries upstream. Entries expire after
//! the configured TTL and the store is bounded by a maximum entry count.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::domain::errors::FetchResult;
use crate::domain::models::{UserId, UserProfile};
use crate::domain::ports::ProfileProvider;

/// Default TTL for cached profiles.
const PROFILE_CACHE_TTL_SECS: u64 = 15;

/// Default maximum number of cached profiles.
const PROFILE_CACHE_MAX_ENTRIES: u64 = 10;

/// Caching decorator over any [`ProfileProvider`].
///
/// Lookups use plain `get`/`insert`, deliberately not moka's coalescing
/// `get_with`: concurrent misses for the same ID may each invoke the inner
/// provider, and whichever completes last wins the cached value.
pub struct CachedProfileProvider<P: ProfileProvider> {
    inner: Arc<P>,
    /// Cache keyed by user ID -> resolved profile.
    profiles: Cache<UserId, Arc<UserProfile>>,
}

impl<P: ProfileProvider> CachedProfileProvider<P> {
    /// Create a cached provider with default TTL and capacity.
    pub fn new(inner: Arc<P>) -> Self {
        Self::with_policy(
            inner,
            PROFILE_CACHE_MAX_ENTRIES,
            Duration::from_secs(PROFILE_CACHE_TTL_SECS),
        )
    }

    /// Create with explicit capacity and TTL.
    pub fn with_policy(inner: Arc<P>, max_entries: u64, ttl: Duration) -> Self {
        let profiles = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self { inner, profiles }
    }
}

#[async_trait]
impl<P: ProfileProvider + 'static> ProfileProvider for CachedProfileProvider<P> {
    async fn get_by_id(&self, id: UserId) -> FetchResult<UserProfile> {
        if let Some(cached) = self.profiles.get(&id).await {
            debug!(user_id = id, "profile cache hit");
            return Ok((*cached).clone());
        }

        debug!(user_id = id, "profile cache miss");

        // Expired entries behave as misses; a failed fetch leaves the
        // cache untouched so the next call retries upstream.
        let profile = self.inner.get_by_id(id).await?;
        self.profiles.insert(id, Arc::new(profile.clone())).await;
        Ok(profile)
    }
}
