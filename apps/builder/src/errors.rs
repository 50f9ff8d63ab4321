use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Preview not mounted")]
    PreviewMissing,

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::PreviewMissing => (
                StatusCode::CONFLICT,
                "PREVIEW_MISSING",
                "Resume preview not found. Please try again.".to_string(),
            ),
            AppError::Export(ExportError::Disabled) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXPORT_DISABLED",
                "Full name and email are required before exporting".to_string(),
            ),
            AppError::Export(ExportError::SurfaceMissing) => (
                StatusCode::CONFLICT,
                "PREVIEW_MISSING",
                "Resume preview not found. Please try again.".to_string(),
            ),
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXPORT_FAILED",
                    "Failed to generate PDF. Please try again.".to_string(),
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
