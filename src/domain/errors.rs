//! Domain errors for the profile service.

use thiserror::Error;

/// Errors surfaced by the upstream client boundary.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The requested resource does not exist upstream (HTTP 404).
    #[error("Resource not found upstream")]
    NotFound,

    /// Any other upstream failure: non-2xx status, transport error,
    /// or a body that failed to decode.
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the aggregation and cache boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The user (or their posts resource) does not exist.
    #[error("User not found")]
    NotFound,

    /// The upstream API could not produce a usable response.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl From<UpstreamError> for FetchError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::NotFound => FetchError::NotFound,
            UpstreamError::Unavailable(cause) => FetchError::UpstreamUnavailable(cause),
        }
    }
}

/// Result alias for upstream client operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Result alias for aggregation and cache operations.
pub type FetchResult<T> = Result<T, FetchError>;
