//! HTTP error mapping for service failures

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use books_core::ServiceError;
use serde::Serialize;
use thiserror::Error;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// A service error on its way to becoming an HTTP response
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ServiceError);

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_) | ServiceError::InvalidField(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = match &self.0 {
            ServiceError::Storage(e) => {
                tracing::error!("Storage failure: {}", e);
                "internal storage error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error,
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
