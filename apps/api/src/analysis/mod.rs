// Resume / job-description matching.
// Two analyzers share one contract: the local keyword engine and the delegated LLM analyzer.
// All LLM calls go through llm_client.

pub mod catalog;
pub mod delegated;
pub mod engine;
pub mod handlers;
pub mod jitter;
pub mod models;
pub mod normalize;
pub mod prompts;
