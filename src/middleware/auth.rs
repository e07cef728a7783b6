use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config;
use crate::error::ApiError;

/// Shared-secret authentication middleware. Protected routes require a
/// `token` header equal to the configured secret; nothing else is checked
/// and no user identity is derived.
pub async fn verify_token_middleware(
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, impl IntoResponse> {
    let expected = &config::config().security.token;
    if expected.is_empty() {
        tracing::error!("API token not configured; rejecting protected request");
        return Err(ApiError::unauthorized("token not configured"));
    }

    match extract_token_from_headers(&headers) {
        Some(token) if token == *expected => Ok(next.run(request).await),
        _ => Err(ApiError::unauthorized("invalid token")),
    }
}

/// Extract the shared-secret token from the `token` header
fn extract_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get("token")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
