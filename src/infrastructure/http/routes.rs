//! HTTP routes exposing the profile service.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::errors::FetchError;
use crate::services::ProfileService;

/// Build the application router.
///
/// Exposes `GET /profiles/{id}`:
/// - `200` with the profile JSON on success
/// - `404` with an empty body when the user is unknown
/// - `400` with a JSON error-attribute body for everything else,
///   including a non-numeric id segment
#[must_use]
pub fn router(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route("/profiles/{id}", get(get_profile))
        .with_state(service)
}

async fn get_profile(
    State(service): State<Arc<ProfileService>>,
    Path(id): Path<String>,
) -> Response {
    let path = format!("/profiles/{id}");

    // ID validation happens here at the boundary, not in the provider
    // chain, so the error body stays in the JSON attribute format.
    let user_id = match id.parse::<u64>() {
        Ok(user_id) => user_id,
        Err(_) => {
            return error_response(&path, format!("Invalid user ID: {id}"));
        }
    };

    debug!(user_id, "resolving profile over HTTP");

    match service.get_by_id(user_id).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(FetchError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            warn!(user_id, error = %err, "profile lookup failed");
            error_response(&path, err.to_string())
        }
    }
}

/// Generic fallback error body.
///
/// Every non-not-found failure maps to 400 with this attribute map; there
/// is deliberately no finer mapping of upstream outages to 502/503.
fn error_response(path: &str, message: String) -> Response {
    let body = json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "status": 400,
        "error": "Bad Request",
        "message": message,
        "path": path,
    });

    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
