//! Mapping of service failures to HTTP responses.

use crate::error::ServiceError;
use crate::transport::http::types::ApiResponse;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub const AUTH_REALM_HEADER: &str = "Basic realm=\"drivers\", charset=\"UTF-8\"";

#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    /// Request could not be read (bad query string or JSON body).
    BadRequest(String),
    Unauthorized,
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(ServiceError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error_with_data(
                    "One or more validation errors occurred.",
                    serde_json::json!({ "errors": errors }),
                )),
            )
                .into_response(),
            ApiError::Service(ServiceError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, Json(ApiResponse::error(msg))).into_response()
            }
            // Details were already logged by the service; never echo them to the client.
            ApiError::Service(ServiceError::Store(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error.")),
            )
                .into_response(),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ApiResponse::error(msg))).into_response()
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, AUTH_REALM_HEADER)],
                Json(ApiResponse::error("Unauthorized")),
            )
                .into_response(),
        }
    }
}
