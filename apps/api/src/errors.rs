use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::entry::EntryError;
use crate::print_host::PrintError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Print timed out: {0}")]
    PrintTimeout(String),

    #[error("Print error: {0}")]
    Print(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EntryError> for AppError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::NotFound(_) => AppError::NotFound(err.to_string()),
            EntryError::InvalidPatch(_) => AppError::Validation(err.to_string()),
        }
    }
}

impl From<PrintError> for AppError {
    fn from(err: PrintError) -> Self {
        match err {
            PrintError::LoadTimeout(_) => AppError::PrintTimeout(err.to_string()),
            PrintError::Blocked | PrintError::Write(_) | PrintError::Print(_) => {
                AppError::Print(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PrintTimeout(msg) => {
                tracing::warn!("Print timeout: {msg}");
                (StatusCode::GATEWAY_TIMEOUT, "PRINT_TIMEOUT", msg.clone())
            }
            AppError::Print(msg) => {
                tracing::error!("Print error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PRINT_ERROR",
                    "The document could not be printed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
