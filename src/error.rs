//! Error types for post-service.
//!
//! Errors are converted to appropriate HTTP responses for API clients.
//! Callers branch on the variant, never on the message text.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for post-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed path parameter or request body; never reaches storage
    #[error("Validation error: {0}")]
    Validation(String),

    /// No row for the requested identifier
    #[error("post not found")]
    NotFound,

    /// Underlying connectivity, query or scan failure
    #[error("Database error: {0}")]
    Database(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            // Storage failures map to 400 carrying the underlying message.
            AppError::Database(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body(self.to_string()),
            _ => {
                let status = self.status_code();
                HttpResponse::build(status).json(serde_json::json!({
                    "error": self.to_string(),
                    "status": status.as_u16(),
                }))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
