use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Display message for any failed delegated analysis. The detail is logged, never shown.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Document text extraction failed. The message is shown to the user as-is.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// The AI gateway failed while extracting a document. The message is
    /// shown as-is; `status` reflects the upstream condition.
    #[error("Extraction service error ({status}): {message}")]
    ExtractionService { status: StatusCode, message: String },

    /// The delegated analysis call failed or returned an unusable payload.
    #[error("Analysis service error: {0}")]
    AnalysisService(String),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Extraction(_) => (StatusCode::BAD_REQUEST, "EXTRACTION_ERROR"),
            AppError::ExtractionService { status, .. } => (*status, "EXTRACTION_FAILED"),
            AppError::AnalysisService(_) => (StatusCode::BAD_GATEWAY, "ANALYSIS_FAILED"),
        }
    }

    /// The human-readable message placed in the response body.
    pub fn display_message(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Extraction(msg)
            | AppError::ExtractionService { message: msg, .. } => msg.clone(),
            AppError::AnalysisService(_) => ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::AnalysisService(msg) => tracing::error!("Analysis service error: {msg}"),
            AppError::ExtractionService { status, message } => {
                tracing::error!("Extraction service error ({status}): {message}")
            }
            AppError::Extraction(msg) => tracing::warn!("Extraction error: {msg}"),
            _ => {}
        }

        let (status, code) = self.status_and_code();
        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.display_message()
            }
        }));

        (status, body).into_response()
    }
}
