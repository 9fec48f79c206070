use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::mailer::MailError;
use crate::storage::StorageError;
use crate::views;
use crate::workflow::WorkflowError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to an HTML error page with a matching status code;
/// server-side detail goes to the log, never to the page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "Invalid submission",
                msg.clone(),
            ),
            AppError::Workflow(e) => (
                StatusCode::BAD_REQUEST,
                "No application in progress",
                format!("{e}. Start again from the application form."),
            ),
            AppError::Generation(msg) => {
                tracing::error!("Draft generation failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Draft generation failed",
                    "The email draft could not be generated. Please try submitting again."
                        .to_string(),
                )
            }
            AppError::Mail(e) => {
                tracing::error!("Mail send failed: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Sending failed",
                    "The email could not be sent. Your draft was not delivered.".to_string(),
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error",
                    "The resume file could not be stored or read.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        (status, Html(views::error_page(title, &message))).into_response()
    }
}
