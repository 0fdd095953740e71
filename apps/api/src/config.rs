use anyhow::{bail, Context, Result};

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Which `MatchAnalyzer` backend serves `/api/v1/analyze`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisStrategy {
    /// Local catalog-based heuristic. No network.
    #[default]
    Keyword,
    /// Delegated to the AI gateway, response normalized locally.
    Llm,
}

impl AnalysisStrategy {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(Self::Keyword),
            "llm" => Ok(Self::Llm),
            other => bail!("ANALYSIS_STRATEGY must be 'keyword' or 'llm', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub analysis_strategy: AnalysisStrategy,
    /// Upper bound of the random term added to keyword scores. 0 disables it.
    pub score_jitter_max: f64,
    /// Only the AI gateway uses this. Text-only uploads and keyword
    /// analysis work without it.
    pub ai_api_key: Option<String>,
    pub ai_gateway_url: String,
    pub ai_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let analysis_strategy = match lookup("ANALYSIS_STRATEGY") {
            Some(v) => AnalysisStrategy::parse(&v)?,
            None => AnalysisStrategy::default(),
        };

        let score_jitter_max = lookup("SCORE_JITTER_MAX")
            .unwrap_or_else(|| "10".to_string())
            .parse::<f64>()
            .context("SCORE_JITTER_MAX must be a number")?;
        if !score_jitter_max.is_finite() || score_jitter_max < 0.0 {
            bail!("SCORE_JITTER_MAX must be a non-negative number");
        }

        let ai_api_key = lookup("AI_API_KEY").filter(|k| !k.trim().is_empty());
        if analysis_strategy == AnalysisStrategy::Llm && ai_api_key.is_none() {
            bail!("Required environment variable 'AI_API_KEY' is not set (ANALYSIS_STRATEGY=llm)");
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            analysis_strategy,
            score_jitter_max,
            ai_api_key,
            ai_gateway_url: lookup("AI_GATEWAY_URL")
                .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
            ai_model: lookup("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.analysis_strategy, AnalysisStrategy::Keyword);
        assert_eq!(config.score_jitter_max, 10.0);
        assert!(config.ai_api_key.is_none());
        assert_eq!(config.ai_gateway_url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.ai_model, DEFAULT_MODEL);
    }

    #[test]
    fn test_llm_strategy_requires_api_key() {
        let err = config_from(&[("ANALYSIS_STRATEGY", "llm")]).unwrap_err();
        assert!(err.to_string().contains("AI_API_KEY"));

        let config = config_from(&[("ANALYSIS_STRATEGY", "LLM"), ("AI_API_KEY", "k")]).unwrap();
        assert_eq!(config.analysis_strategy, AnalysisStrategy::Llm);
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let config = config_from(&[("AI_API_KEY", "   ")]).unwrap();
        assert!(config.ai_api_key.is_none());
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(config_from(&[("ANALYSIS_STRATEGY", "magic")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_negative_jitter_is_rejected() {
        assert!(config_from(&[("SCORE_JITTER_MAX", "-1")]).is_err());
        let config = config_from(&[("SCORE_JITTER_MAX", "0")]).unwrap();
        assert_eq!(config.score_jitter_max, 0.0);
    }
}
