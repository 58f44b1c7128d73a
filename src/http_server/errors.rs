//! # API Errors
//!
//! Dataset failures surface as `500 Internal Server Error` with a small JSON
//! body. Unmatched routes never reach this type; axum answers them with 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::dataset::DatasetError;
use crate::observability::{Event, Logger};

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Dataset unavailable or query failed
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Dataset(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error code string
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Dataset(e) => e.code(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(&self);
        Logger::error(
            Event::QueryFailed.as_str(),
            &[("code", body.code), ("error", &body.error)],
        );
        (status, Json(body)).into_response()
    }
}
