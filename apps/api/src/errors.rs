#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every fetch-cycle failure lands in one of the first three domain
/// variants and degrades to "no graph update, structured error body".
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No completion-service credential available")]
    MissingCredential,

    #[error("Completion service error: {0}")]
    CompletionService(String),

    #[error("Malformed graph response: {0}")]
    MalformedGraph(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingCredential => (
                StatusCode::SERVICE_UNAVAILABLE,
                "MISSING_CREDENTIAL",
                "GEMINI_API_KEY not found in the secrets file or environment".to_string(),
            ),
            AppError::CompletionService(msg) => {
                tracing::error!("Completion service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPLETION_SERVICE_ERROR",
                    format!("AI analysis failed: {msg}"),
                )
            }
            AppError::MalformedGraph(msg) => {
                tracing::error!("Malformed graph response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_GRAPH",
                    format!("AI analysis returned an unusable response: {msg}"),
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
