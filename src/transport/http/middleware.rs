use crate::transport::http::error::ApiError;
use crate::transport::http::types::AppState;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Rejects the request with 401 unless it carries the configured Basic credentials.
/// Runs before any handler; the reason for a rejection is only logged.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match state.authenticator.authenticate(auth_header) {
        Ok(username) => {
            tracing::debug!(%username, path = %request.uri().path(), "request authenticated");
            next.run(request).await
        }
        Err(reason) => {
            tracing::debug!(%reason, path = %request.uri().path(), "authentication failed");
            ApiError::Unauthorized.into_response()
        }
    }
}
