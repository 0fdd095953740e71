use serde::{Deserialize, Serialize};

/// Coarse bucket derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Strong,
    Moderate,
    Weak,
}

impl Recommendation {
    pub const STRONG_THRESHOLD: u32 = 75;
    pub const MODERATE_THRESHOLD: u32 = 50;

    /// `>= 75` strong, `50..75` moderate, anything lower weak.
    pub fn from_score(score: u32) -> Self {
        if score >= Self::STRONG_THRESHOLD {
            Recommendation::Strong
        } else if score >= Self::MODERATE_THRESHOLD {
            Recommendation::Moderate
        } else {
            Recommendation::Weak
        }
    }

    /// Parses one of the three wire tokens, ignoring case and surrounding whitespace.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "strong" => Some(Recommendation::Strong),
            "moderate" => Some(Recommendation::Moderate),
            "weak" => Some(Recommendation::Weak),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Strong => "strong",
            Recommendation::Moderate => "moderate",
            Recommendation::Weak => "weak",
        }
    }
}

/// Request body of `POST /api/v1/analyze`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description_text: String,
}

/// Structured outcome of one resume/job-description comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_match: String,
    pub education_match: String,
    pub summary: String,
    pub recommendation: Recommendation,
}
