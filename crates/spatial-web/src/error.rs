//! HTTP error type for the upload service

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use spatial_core::CoreError;
use spatial_types::ApiErrorBody;

/// Error returned by upload handlers
///
/// Renders as `{"error": "..."}` so the dashboard can show the message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) if core.is_client_error() => {
                (StatusCode::BAD_REQUEST, core.to_string())
            }
            AppError::Core(core) => {
                tracing::error!(error = %core, "Upload processing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Multipart(err) => {
                tracing::warn!(error = %err, "Rejected multipart body");
                (err.status(), err.body_text())
            }
        };

        (status, Json(ApiErrorBody::new(message))).into_response()
    }
}
