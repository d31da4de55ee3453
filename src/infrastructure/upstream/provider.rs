//! Aggregating profile provider over the upstream client.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::errors::{FetchError, FetchResult, UpstreamError};
use crate::domain::models::{UserId, UserProfile};
use crate::domain::ports::ProfileProvider;
use crate::infrastructure::upstream::UpstreamClient;

/// Resolves profiles by joining two concurrent upstream calls.
///
/// The user record and the posts list do not depend on each other, so both
/// requests are issued at once and joined. A profile is only produced when
/// both succeed; there is no partial result.
pub struct JsonPlaceholderProfileProvider {
    client: UpstreamClient,
}

impl JsonPlaceholderProfileProvider {
    /// Wrap an upstream client.
    #[must_use]
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileProvider for JsonPlaceholderProfileProvider {
    async fn get_by_id(&self, id: UserId) -> FetchResult<UserProfile> {
        debug!(user_id = id, "aggregating profile from upstream");

        // Both calls run to completion before the outcome is decided:
        // a 404 from either side must win over a concurrent transport
        // failure, so no short-circuit join here.
        let (user, posts) = tokio::join!(self.client.fetch_user(id), self.client.fetch_posts(id));

        match (user, posts) {
            (Ok(user), Ok(posts)) => Ok(UserProfile::assemble(user, posts)),
            (Err(UpstreamError::NotFound), _) | (_, Err(UpstreamError::NotFound)) => {
                Err(FetchError::NotFound)
            }
            (Err(UpstreamError::Unavailable(cause)), _)
            | (_, Err(UpstreamError::Unavailable(cause))) => {
                Err(FetchError::UpstreamUnavailable(cause))
            }
        }
    }
}
