//! Normalization of delegated analysis payloads.
//!
//! The AI gateway is asked for `{ "success": true, "analysis": { ... } }`.
//! Anything beyond the success flag, the analysis object and its score is
//! optional and gets a placeholder instead of failing the request.

use serde_json::{Map, Value};

use crate::analysis::models::{AnalysisResult, Recommendation};
use crate::errors::AppError;

pub const EXPERIENCE_PLACEHOLDER: &str = "Experience assessment unavailable";
pub const EDUCATION_PLACEHOLDER: &str = "Education assessment unavailable";
pub const SUMMARY_PLACEHOLDER: &str = "No summary available";

/// Validates a delegated payload and fills in every optional field.
pub fn normalize_delegated(payload: &Value) -> Result<AnalysisResult, AppError> {
    let success = payload
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !success {
        let reason = payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("success flag missing or false");
        return Err(AppError::AnalysisService(format!(
            "delegated analysis unsuccessful: {reason}"
        )));
    }

    let analysis = payload
        .get("analysis")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            AppError::AnalysisService("delegated analysis has no analysis object".to_string())
        })?;

    let overall_score = analysis
        .get("overallScore")
        .and_then(Value::as_f64)
        .filter(|s| s.is_finite())
        .map(|s| s.round().clamp(0.0, 100.0) as u32)
        .ok_or_else(|| {
            AppError::AnalysisService("delegated analysis has no numeric overallScore".to_string())
        })?;

    let recommendation = analysis
        .get("recommendation")
        .and_then(Value::as_str)
        .and_then(Recommendation::parse_token)
        .unwrap_or_else(|| Recommendation::from_score(overall_score));

    Ok(AnalysisResult {
        overall_score,
        matched_skills: string_list(analysis, "matchedSkills"),
        missing_skills: string_list(analysis, "missingSkills"),
        experience_match: string_or(analysis, "experienceMatch", EXPERIENCE_PLACEHOLDER),
        education_match: string_or(analysis, "educationMatch", EDUCATION_PLACEHOLDER),
        summary: string_or(analysis, "summary", SUMMARY_PLACEHOLDER),
        recommendation,
    })
}

fn string_list(analysis: &Map<String, Value>, key: &str) -> Vec<String> {
    analysis
        .get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn string_or(analysis: &Map<String, Value>, key: &str, placeholder: &str) -> String {
    analysis
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}
