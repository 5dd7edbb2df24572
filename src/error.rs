//! Error types for Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Out of stock: {0}")]
    OutOfStock(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Validation failure with a single message and no per-field details
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            details: Vec::new(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid value for field '{}'", field),
                })
            })
            .collect();

        AppError::Validation {
            message: "Validation error".to_string(),
            details,
        }
    }
}

/// Error response body, shaped like every other API envelope
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Short description of what went wrong
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Per-field validation messages, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Validation { message, details } => {
                let details = if details.is_empty() { None } else { Some(details) };
                (StatusCode::BAD_REQUEST, message, details)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
            AppError::OutOfStock(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Database(e) => {
                // The stock CHECK and NOT NULL columns back the validation
                // layer; surface their violations as caller mistakes.
                if let sqlx::Error::Database(db_err) = &e {
                    if matches!(
                        db_err.kind(),
                        sqlx::error::ErrorKind::CheckViolation
                            | sqlx::error::ErrorKind::NotNullViolation
                    ) {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                success: false,
                                error: "Validation error".to_string(),
                                message: None,
                                details: Some(vec![db_err.message().to_string()]),
                            }),
                        )
                            .into_response();
                    }
                }
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error,
            message: None,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
