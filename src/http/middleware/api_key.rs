//! API key middleware.
//! Enforces the static shared secret on every /api route.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Compare the `x-api-key` header against the configured secret.
///
/// Exact match only. When no secret is configured, every request is
/// rejected, including requests with an empty or absent header; the
/// config loader already warned about that at startup.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let supplied = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());

    match (state.config.auth.api_key.as_deref(), supplied) {
        (Some(expected), Some(given)) if given == expected => Ok(next.run(request).await),
        _ => Err(ApiError::unauthorized()),
    }
}
