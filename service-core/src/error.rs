use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error returned by HTTP handlers.
///
/// Every variant renders as `{"detail": "..."}` with the matching status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// A request body that could not be turned into the expected type.
    #[error("{1}")]
    Rejected(StatusCode, String),

    /// Server-side failure whose message is safe to show to the caller.
    #[error("{0}")]
    InternalError(String),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected(status, _) => *status,
            AppError::InternalError(_) | AppError::ConfigError(_) | AppError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            AppError::ValidationError(err) => format!("Validation error: {}", err),
            AppError::Rejected(_, msg) | AppError::InternalError(msg) => msg,
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error while serving request");
                "Configuration error".to_string()
            }
            AppError::IoError(err) => {
                tracing::error!(error = %err, "IO error while serving request");
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
