//! Typed errors and HTTP mapping.

use crate::response::MessageBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Fixed message for 404 responses.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
/// Fixed message for 500 responses. Internal detail is logged, never returned.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Client-supplied data violates the payload schema, or the body is unreadable.
    #[error("{0}")]
    Validation(String),
    #[error("resource not found")]
    NotFound,
    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Failures the caller cannot fix; these become a generic 500.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Db(_) | AppError::Internal(_))
    }

    /// Log an internal failure with the operation that hit it. Client errors pass through unlogged.
    pub fn logged(self, operation: &'static str) -> Self {
        if self.is_internal() {
            tracing::error!(operation, error = %self, "request failed");
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            AppError::PayloadTooLarge => self.to_string(),
            AppError::Db(_) | AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };
        (status, Json(MessageBody { message })).into_response()
    }
}
