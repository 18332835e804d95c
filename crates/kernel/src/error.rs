//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("unknown navigation: {0}")]
    UnknownNavigation(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UnknownNavigation(_) => StatusCode::NOT_FOUND,
        };

        // Internal details are logged, not leaked to the client.
        let body = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
                "internal server error".to_string()
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "internal server error".to_string()
            }
            AppError::UnknownNavigation(_) => self.to_string(),
        };

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
