//! Delegated analysis — same `MatchAnalyzer` contract, scored by the AI gateway.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::analysis::engine::{validate_input, MatchAnalyzer};
use crate::analysis::models::AnalysisResult;
use crate::analysis::normalize::normalize_delegated;
use crate::analysis::prompts::{analysis_system, build_analysis_prompt};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Sends both documents to the LLM and normalizes whatever comes back.
/// Any gateway failure becomes `AppError::AnalysisService`; no partial result is produced.
pub struct LlmMatchAnalyzer(pub LlmClient);

#[async_trait]
impl MatchAnalyzer for LlmMatchAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<AnalysisResult, AppError> {
        validate_input(resume_text, job_description_text)?;

        let prompt = build_analysis_prompt(resume_text, job_description_text);
        let payload: Value = self
            .0
            .call_json(&prompt, &analysis_system())
            .await
            .map_err(|e| AppError::AnalysisService(format!("delegated analysis call failed: {e}")))?;

        let result = normalize_delegated(&payload)?;
        debug!(
            overall_score = result.overall_score,
            recommendation = result.recommendation.as_str(),
            "delegated analysis complete"
        );
        Ok(result)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}
