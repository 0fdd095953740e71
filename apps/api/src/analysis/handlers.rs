//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use tracing::info;

use crate::analysis::models::{AnalysisInput, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Scores a resume against a job description with the configured analyzer.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisInput>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = state
        .analyzer
        .analyze(&request.resume_text, &request.job_description_text)
        .await?;

    info!(
        backend = state.analyzer.backend(),
        "Resume scored {}% match with the job requirements",
        result.overall_score
    );

    Ok(Json(result))
}
