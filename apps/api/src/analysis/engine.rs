//! Match engine — pluggable, trait-based analyzer comparing a resume to a job description.
//!
//! Default: `KeywordMatchEngine` (pure-Rust, catalog substring matching, injectable jitter).
//! Alternative: `LlmMatchAnalyzer` (delegated to the AI gateway, see `delegated.rs`).
//!
//! `AppState` holds an `Arc<dyn MatchAnalyzer>`, chosen at startup via config.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::analysis::catalog::SkillCatalog;
use crate::analysis::jitter::JitterSource;
use crate::analysis::models::{AnalysisResult, Recommendation};
use crate::errors::AppError;

pub const MISSING_INFORMATION_MESSAGE: &str =
    "Please enter both a resume and job description to analyze.";

const EXPERIENCE_BONUS: f64 = 10.0;
const EDUCATION_BONUS: f64 = 5.0;
const SKILL_WEIGHT: f64 = 0.7;
/// Skill score used when the job description names no catalog skill.
const NEUTRAL_SKILL_SCORE: f64 = 50.0;

const EXPERIENCE_FOUND: &str = "Candidate shows relevant work experience";
const EXPERIENCE_NOT_FOUND: &str = "Experience details could be more detailed";
const EDUCATION_FOUND: &str = "Educational background aligns with requirements";
const EDUCATION_NOT_FOUND: &str = "Educational qualifications not clearly specified";

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "university",
    "college",
];

/// An ASCII number followed by "year(s)" or "yr(s)".
static EXPERIENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+\s*(years?|yrs?)").expect("Invalid experience regex")
});

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The analyzer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait MatchAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<AnalysisResult, AppError>;

    /// "keyword" | "llm", for logs.
    fn backend(&self) -> &'static str;
}

/// Rejects the request when either document is blank.
pub fn validate_input(resume_text: &str, job_description_text: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() || job_description_text.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INFORMATION_MESSAGE.to_string()));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchEngine
// ────────────────────────────────────────────────────────────────────────────

/// Catalog skills found in each document plus their intersection and difference.
/// All four lists are lowercase catalog entries in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch<'a> {
    pub resume_skills: Vec<&'a str>,
    pub required_skills: Vec<&'a str>,
    pub matched: Vec<&'a str>,
    pub missing: Vec<&'a str>,
}

impl SkillMatch<'_> {
    /// `100 * matched / required`, or the neutral score when nothing is required.
    pub fn skill_score(&self) -> f64 {
        if self.required_skills.is_empty() {
            NEUTRAL_SKILL_SCORE
        } else {
            100.0 * self.matched.len() as f64 / self.required_skills.len() as f64
        }
    }
}

/// Pure-Rust keyword analyzer. No network, no shared mutable state.
///
/// Algorithm:
/// 1. Find catalog skills in the lowercased resume and job description.
/// 2. matched = resume ∩ required, missing = required − resume.
/// 3. score = round(skill_score × 0.7 + experience(10) + education(5) + jitter), capped at 100.
/// 4. Tier: strong (≥75), moderate (50–74), weak (<50).
pub struct KeywordMatchEngine {
    catalog: SkillCatalog,
    jitter: Box<dyn JitterSource>,
}

impl KeywordMatchEngine {
    pub fn new(catalog: SkillCatalog, jitter: impl JitterSource + 'static) -> Self {
        if catalog.is_empty() {
            warn!("Keyword engine built with an empty skill catalog");
        }
        debug!(skills = catalog.len(), "keyword engine ready");
        Self {
            catalog,
            jitter: Box::new(jitter),
        }
    }

    pub fn match_skills(&self, resume_lower: &str, job_lower: &str) -> SkillMatch<'_> {
        let resume_skills = self.catalog.find_in(resume_lower);
        let required_skills = self.catalog.find_in(job_lower);

        let matched = resume_skills
            .iter()
            .copied()
            .filter(|s| required_skills.contains(s))
            .collect();
        let missing = required_skills
            .iter()
            .copied()
            .filter(|s| !resume_skills.contains(s))
            .collect();

        SkillMatch {
            resume_skills,
            required_skills,
            matched,
            missing,
        }
    }

    /// Synchronous core of `MatchAnalyzer::analyze`.
    pub fn analyze_text(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<AnalysisResult, AppError> {
        validate_input(resume_text, job_description_text)?;

        let resume_lower = resume_text.to_lowercase();
        let job_lower = job_description_text.to_lowercase();

        let skills = self.match_skills(&resume_lower, &job_lower);

        let has_experience = EXPERIENCE_PATTERN.is_match(resume_text);
        let has_education = EDUCATION_KEYWORDS.iter().any(|k| resume_lower.contains(k));

        let experience_bonus = if has_experience { EXPERIENCE_BONUS } else { 0.0 };
        let education_bonus = if has_education { EDUCATION_BONUS } else { 0.0 };

        let raw = skills.skill_score() * SKILL_WEIGHT
            + experience_bonus
            + education_bonus
            + self.jitter.sample();
        let overall_score = raw.round().clamp(0.0, 100.0) as u32;

        let summary = build_summary(&skills);

        debug!(
            found = skills.resume_skills.len(),
            matched = skills.matched.len(),
            required = skills.required_skills.len(),
            has_experience,
            has_education,
            overall_score,
            "keyword analysis complete"
        );

        Ok(AnalysisResult {
            overall_score,
            matched_skills: skills.matched.iter().map(|s| display_skill(s)).collect(),
            missing_skills: skills.missing.iter().map(|s| display_skill(s)).collect(),
            experience_match: if has_experience {
                EXPERIENCE_FOUND
            } else {
                EXPERIENCE_NOT_FOUND
            }
            .to_string(),
            education_match: if has_education {
                EDUCATION_FOUND
            } else {
                EDUCATION_NOT_FOUND
            }
            .to_string(),
            summary,
            recommendation: Recommendation::from_score(overall_score),
        })
    }
}

#[async_trait]
impl MatchAnalyzer for KeywordMatchEngine {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<AnalysisResult, AppError> {
        self.analyze_text(resume_text, job_description_text)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// Uppercases the first character only: `node.js` → `Node.js`.
pub fn display_skill(skill: &str) -> String {
    let mut chars = skill.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn build_summary(skills: &SkillMatch<'_>) -> String {
    let mut parts = vec![format!(
        "The candidate demonstrates {} out of {} required skills.",
        skills.matched.len(),
        skills.required_skills.len()
    )];

    if !skills.matched.is_empty() {
        let top: Vec<&str> = skills.matched.iter().take(3).copied().collect();
        parts.push(format!("Strong matches in {}.", top.join(", ")));
    }

    if skills.missing.is_empty() {
        parts.push("Excellent skill coverage.".to_string());
    } else {
        let top: Vec<&str> = skills.missing.iter().take(2).copied().collect();
        parts.push(format!(
            "Consider evaluating proficiency in {}.",
            top.join(" and ")
        ));
    }

    parts.join(" ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::jitter::{FixedJitter, NoJitter, RandomJitter};

    const SCENARIO_RESUME: &str =
        "5 years of experience in React and Node.js, B.S. Computer Science";
    const SCENARIO_JOB: &str = "Looking for React and Python developer, 3+ years";

    fn engine() -> KeywordMatchEngine {
        KeywordMatchEngine::new(SkillCatalog::default(), NoJitter)
    }

    #[test]
    fn test_documented_scenario_exact_result() {
        let result = engine().analyze_text(SCENARIO_RESUME, SCENARIO_JOB).unwrap();
        assert_eq!(result.matched_skills, vec!["React"]);
        assert_eq!(result.missing_skills, vec!["Python"]);
        assert_eq!(result.experience_match, EXPERIENCE_FOUND);
        // "B.S. Computer Science" names none of the education keywords
        assert_eq!(result.education_match, EDUCATION_NOT_FOUND);
        // 50 * 0.7 + 10
        assert_eq!(result.overall_score, 45);
        assert_eq!(result.recommendation, Recommendation::Weak);
        assert_eq!(
            result.summary,
            "The candidate demonstrates 1 out of 2 required skills. \
             Strong matches in react. Consider evaluating proficiency in python."
        );
    }

    #[test]
    fn test_empty_job_description_is_validation_error() {
        let err = engine().analyze_text("Python developer", "   \n\t").unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, MISSING_INFORMATION_MESSAGE),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_resume_is_validation_error() {
        assert!(matches!(
            engine().analyze_text("", "Python developer"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_all_required_skills_missing() {
        let result = engine()
            .analyze_text("I enjoy gardening", "Need Docker, Kubernetes and AWS")
            .unwrap();
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.missing_skills, vec!["Aws", "Docker", "Kubernetes"]);
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.recommendation, Recommendation::Weak);
        assert_eq!(
            result.summary,
            "The candidate demonstrates 0 out of 3 required skills. \
             Consider evaluating proficiency in aws and docker."
        );
    }

    #[test]
    fn test_no_required_skills_uses_neutral_score() {
        let result = engine()
            .analyze_text("Gardener with flair", "Looking for a friendly person")
            .unwrap();
        assert_eq!(result.overall_score, 35);
        assert_eq!(
            result.summary,
            "The candidate demonstrates 0 out of 0 required skills. Excellent skill coverage."
        );
    }

    #[test]
    fn test_full_coverage_with_bonuses_is_strong() {
        let result = engine()
            .analyze_text(
                "Python and Django, 7 yrs professional, Master of Science from State University",
                "Python / Django engineer",
            )
            .unwrap();
        // 100 * 0.7 + 10 + 5
        assert_eq!(result.overall_score, 85);
        assert_eq!(result.recommendation, Recommendation::Strong);
        assert_eq!(result.education_match, EDUCATION_FOUND);
        assert!(result.summary.ends_with("Excellent skill coverage."));
    }

    #[test]
    fn test_score_is_capped_at_100() {
        // 70 + 10 + 5 + 30
        let engine = KeywordMatchEngine::new(SkillCatalog::default(), FixedJitter(30.0));
        let result = engine
            .analyze_text("react, 10 years, phd", "react")
            .unwrap();
        assert_eq!(result.overall_score, 100);
    }

    #[test]
    fn test_jitter_is_added_before_rounding() {
        let engine = KeywordMatchEngine::new(SkillCatalog::default(), FixedJitter(4.6));
        let result = engine.analyze_text(SCENARIO_RESUME, SCENARIO_JOB).unwrap();
        // 45 + 4.6 = 49.6 → 50
        assert_eq!(result.overall_score, 50);
        assert_eq!(result.recommendation, Recommendation::Moderate);
    }

    #[test]
    fn test_summary_names_at_most_three_matches_and_two_gaps() {
        let result = engine()
            .analyze_text(
                "JavaScript TypeScript React Python",
                "JavaScript TypeScript React Python Docker Kubernetes Flask",
            )
            .unwrap();
        assert!(result
            .summary
            .contains("Strong matches in javascript, typescript, react."));
        assert!(result
            .summary
            .contains("Consider evaluating proficiency in docker and kubernetes."));
    }

    #[test]
    fn test_experience_pattern_variants() {
        for resume in ["3 years", "1 year", "12yrs", "4 yr", "10 YEARS of work"] {
            assert!(EXPERIENCE_PATTERN.is_match(resume), "{resume}");
        }
        for resume in ["many years", "years of work", "a yr"] {
            assert!(!EXPERIENCE_PATTERN.is_match(resume), "{resume}");
        }
    }

    #[test]
    fn test_experience_pattern_counts_ascii_digits_only() {
        assert!(!EXPERIENCE_PATTERN.is_match("\u{ff15} years"));
        assert!(!EXPERIENCE_PATTERN.is_match("\u{0665} yrs"));
        assert!(EXPERIENCE_PATTERN.is_match("5 years"));
    }

    #[test]
    fn test_summary_uses_catalog_names_while_lists_use_display_form() {
        let result = engine()
            .analyze_text("react developer", "react and node.js")
            .unwrap();
        assert_eq!(result.matched_skills, vec!["React"]);
        assert_eq!(result.missing_skills, vec!["Node.js"]);
        assert!(result.summary.ends_with(
            "Strong matches in react. Consider evaluating proficiency in node.js."
        ));
    }

    #[test]
    fn test_education_keywords_are_substrings() {
        let result = engine()
            .analyze_text("Masterful communicator", "communication")
            .unwrap();
        assert_eq!(result.education_match, EDUCATION_FOUND);
    }

    #[test]
    fn test_display_skill_uppercases_first_char_only() {
        assert_eq!(display_skill("node.js"), "Node.js");
        assert_eq!(display_skill("ci/cd"), "Ci/cd");
        assert_eq!(display_skill("rest api"), "Rest api");
        assert_eq!(display_skill(""), "");
    }

    #[test]
    fn test_match_sets_follow_set_algebra() {
        let engine = engine();
        let catalog = SkillCatalog::default();
        let resume = "python docker sql git leadership javascript";
        let job = "python kubernetes postgresql git aws vue";
        let skills = engine.match_skills(resume, job);

        for skill in catalog.skills() {
            let s = skill.as_str();
            let in_resume = skills.resume_skills.contains(&s);
            let in_required = skills.required_skills.contains(&s);
            assert_eq!(skills.matched.contains(&s), in_resume && in_required, "{s}");
            assert_eq!(skills.missing.contains(&s), in_required && !in_resume, "{s}");
        }
        assert!(skills
            .missing
            .iter()
            .all(|s| !skills.resume_skills.contains(s)));
    }

    #[test]
    fn test_matching_is_literal_substring() {
        // "javascript" contains "java"; "postgresql" contains "sql"
        let result = engine()
            .analyze_text("JavaScript and PostgreSQL", "Java and SQL")
            .unwrap();
        assert_eq!(result.matched_skills, vec!["Java", "Sql"]);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_identical_inputs_agree_modulo_jitter() {
        let engine = KeywordMatchEngine::new(SkillCatalog::default(), RandomJitter::new(10.0));
        let a = engine.analyze_text(SCENARIO_RESUME, SCENARIO_JOB).unwrap();
        let b = engine.analyze_text(SCENARIO_RESUME, SCENARIO_JOB).unwrap();
        assert_eq!(a.matched_skills, b.matched_skills);
        assert_eq!(a.missing_skills, b.missing_skills);
        assert_eq!(a.summary, b.summary);
        assert!((45..=55).contains(&a.overall_score));
        assert!((45..=55).contains(&b.overall_score));
    }

    #[test]
    fn test_score_in_range_for_pathological_inputs() {
        let engine = KeywordMatchEngine::new(SkillCatalog::default(), RandomJitter::new(10.0));
        let long = "react 99 years phd ".repeat(10_000);
        let cases = [
            (long.as_str(), "react"),
            ("x", "y"),
            ("🙂 ünïcödé", "ßtraße REACT"),
            ("react", long.as_str()),
        ];
        for (resume, job) in cases {
            let result = engine.analyze_text(resume, job).unwrap();
            assert!(result.overall_score <= 100);
            assert_eq!(
                result.recommendation,
                Recommendation::from_score(result.overall_score)
            );
        }
    }

    #[test]
    fn test_custom_catalog() {
        let engine = KeywordMatchEngine::new(SkillCatalog::new(["Rust", "Go"]), NoJitter);
        let result = engine.analyze_text("rust", "Rust and Go").unwrap();
        assert_eq!(result.matched_skills, vec!["Rust"]);
        assert_eq!(result.missing_skills, vec!["Go"]);
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let analyzer: Box<dyn MatchAnalyzer> = Box::new(engine());
        assert_eq!(analyzer.backend(), "keyword");
        let result = analyzer.analyze(SCENARIO_RESUME, SCENARIO_JOB).await.unwrap();
        assert_eq!(result.overall_score, 45);
    }
}
