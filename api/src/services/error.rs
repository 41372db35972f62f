//! Error handling utilities for route handlers

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::models::ErrorBody;

/// Status plus the fixed message returned to the caller as `{ "error": ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    pub const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub const fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

/// Extension trait for logging errors and converting to an `ApiError`
pub trait LogErr<T> {
    /// Log error with context and return a 500 "Internal server error"
    fn log_500(self, context: &str) -> Result<T, ApiError>;

    /// Log error with context and return a custom status and message
    fn log_status(self, context: &str, status: StatusCode, message: &'static str)
    -> Result<T, ApiError>;
}

impl<T, E: std::fmt::Display> LogErr<T> for Result<T, E> {
    fn log_500(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|e| {
            error!(error = %e, "{}", context);
            ApiError::internal()
        })
    }

    fn log_status(
        self,
        context: &str,
        status: StatusCode,
        message: &'static str,
    ) -> Result<T, ApiError> {
        self.map_err(|e| {
            error!(error = %e, %status, "{}", context);
            ApiError::new(status, message)
        })
    }
}
