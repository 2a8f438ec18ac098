//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that renders every failure as the JSON
//! envelope `{"error": {"message": "..."}}` and captures unexpected database
//! errors to Sentry before responding. All route handlers return
//! `Result<T, ApiError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the cafe API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Store operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Bad request from client (missing or empty parameter).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// API key missing or wrong.
    #[error("forbidden: {0}")]
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture unexpected server errors to Sentry
        if matches!(self, Self::Repository(RepositoryError::Database(_))) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Repository(err) => match err {
                RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                RepositoryError::Conflict(_) | RepositoryError::InvalidInput(_) => {
                    StatusCode::BAD_REQUEST
                }
                RepositoryError::NotFound | RepositoryError::Empty => StatusCode::NOT_FOUND,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        };

        // Don't expose internal error details to clients
        let message = match self {
            Self::Repository(err) => match err {
                RepositoryError::Database(_) => "Internal server error".to_owned(),
                RepositoryError::Conflict(_) => "Cafe with this name already exists".to_owned(),
                RepositoryError::InvalidInput(msg) => msg,
                RepositoryError::NotFound => {
                    "Cafe with that id was not found in the database.".to_owned()
                }
                RepositoryError::Empty => "No cafes in the database yet.".to_owned(),
            },
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::Forbidden(msg) => msg,
        };

        (status, Json(json!({ "error": { "message": message } }))).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
