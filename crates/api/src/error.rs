//! API error types with HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::ValidationError;
use registry::DatasetError;
use serde::Serialize;

/// `error` field of every 400 response body.
pub const INVALID_INPUT: &str = "Invalid input";

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The identifier is missing or malformed.
    BadRequest(ValidationError),
    /// The dataset could not be loaded.
    Dataset(DatasetError),
    /// Internal server error.
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(err) => {
                let body = ErrorBody {
                    error: INVALID_INPUT,
                    message: err.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            // Server-side failures are logged here and never described to the caller.
            ApiError::Dataset(err) => {
                tracing::error!(error = %err, kind = err.kind(), "dataset lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err)
    }
}

impl From<DatasetError> for ApiError {
    fn from(err: DatasetError) -> Self {
        ApiError::Dataset(err)
    }
}
