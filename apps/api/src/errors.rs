use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::compose::BlockKind;

/// Application-level error type.
///
/// Only configuration defects and boundary validation surface here. Empty
/// profile fields, missing labels and oversized text are absorbed by the
/// engine and never become errors.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template '{template}' has no style rule for {kind:?}")]
    IncompleteTemplate { template: String, kind: BlockKind },

    #[error("Label '{key}' is missing or ambiguous for language '{language}'")]
    MissingLabel { language: String, key: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnknownTemplate(id) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_TEMPLATE",
                format!("Template '{id}' is not registered"),
            ),
            AppError::IncompleteTemplate { .. } | AppError::MissingLabel { .. } => {
                tracing::error!("Configuration error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    "The document engine is misconfigured".to_string(),
                )
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "The document could not be generated".to_string(),
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
