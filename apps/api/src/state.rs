use std::sync::Arc;

use anyhow::{Context, Result};

use crate::analysis::catalog::SkillCatalog;
use crate::analysis::delegated::LlmMatchAnalyzer;
use crate::analysis::engine::{KeywordMatchEngine, MatchAnalyzer};
use crate::analysis::jitter::RandomJitter;
use crate::config::{AnalysisStrategy, Config};
use crate::extraction::document::DocumentExtractor;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analyzer. Default: KeywordMatchEngine. Swap via ANALYSIS_STRATEGY env.
    pub analyzer: Arc<dyn MatchAnalyzer>,
    pub extractor: DocumentExtractor,
}

impl AppState {
    /// Wires the LLM client, analyzer and extractor from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let llm = LlmClient::new(
            config.ai_api_key.clone(),
            config.ai_gateway_url.clone(),
            config.ai_model.clone(),
        )
        .context("Failed to build AI gateway client")?;

        let analyzer: Arc<dyn MatchAnalyzer> = match config.analysis_strategy {
            AnalysisStrategy::Keyword => Arc::new(KeywordMatchEngine::new(
                SkillCatalog::default(),
                RandomJitter::new(config.score_jitter_max),
            )),
            AnalysisStrategy::Llm => Arc::new(LlmMatchAnalyzer(llm.clone())),
        };

        Ok(AppState {
            analyzer,
            extractor: DocumentExtractor::new(llm),
        })
    }
}
