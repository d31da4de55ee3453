//! HTTP client for the upstream REST API.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client as ReqwestClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::errors::{UpstreamError, UpstreamResult};
use crate::domain::models::{Post, UpstreamConfig, UserId, UserRecord};

/// Client for the upstream users/posts API.
///
/// Issues plain GET requests and maps responses into the upstream error
/// taxonomy. No retries and no caching at this layer; the cache adapter
/// sits above it and nothing retries.
pub struct UpstreamClient {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,
    base_url: String,
    users_path: String,
    posts_path: String,
}

impl UpstreamClient {
    /// Build a client from upstream configuration.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            users_path: config.users_relative_path.clone(),
            posts_path: config.posts_relative_path.clone(),
        })
    }

    /// Fetch the raw user record for `id` from `users/{id}`.
    ///
    /// # Errors
    ///
    /// `NotFound` on 404; `Unavailable` on any other non-2xx status,
    /// transport failure, or undecodable body.
    pub async fn fetch_user(&self, id: UserId) -> UpstreamResult<UserRecord> {
        let url = format!("{}/{}/{}", self.base_url, self.users_path, id);
        debug!(%url, "fetching user record");

        let response = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| UpstreamError::Unavailable(err.to_string()))?;

        Self::decode(response).await
    }

    /// Fetch the posts authored by `id` from `posts?userId={id}`.
    ///
    /// # Errors
    ///
    /// Same mapping as [`fetch_user`](Self::fetch_user).
    pub async fn fetch_posts(&self, id: UserId) -> UpstreamResult<Vec<Post>> {
        let url = format!("{}/{}", self.base_url, self.posts_path);
        debug!(%url, user_id = id, "fetching user posts");

        let response = self
            .http_client
            .get(&url)
            .query(&[("userId", id)])
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| UpstreamError::Unavailable(err.to_string()))?;

        Self::decode(response).await
    }

    /// Map an upstream response to the error taxonomy and decode the body.
    async fn decode<T: DeserializeOwned>(response: Response) -> UpstreamResult<T> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }

        if !status.is_success() {
            return Err(UpstreamError::Unavailable(format!(
                "unexpected upstream status: {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| UpstreamError::Unavailable(format!("malformed upstream body: {err}")))
    }
}
