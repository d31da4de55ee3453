//! Port for resolving user profiles.

use async_trait::async_trait;

use crate::domain::errors::FetchResult;
use crate::domain::models::{UserId, UserProfile};

/// Contract for anything that can resolve a [`UserProfile`] by user ID.
///
/// Implemented by the aggregating upstream provider and decorated by the
/// caching adapter; the service facade only ever talks to this trait.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Resolve the profile for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`](crate::FetchError::NotFound) when the
    /// user does not exist upstream, and
    /// [`FetchError::UpstreamUnavailable`](crate::FetchError::UpstreamUnavailable)
    /// for any other upstream failure.
    async fn get_by_id(&self, id: UserId) -> FetchResult<UserProfile>;
}
