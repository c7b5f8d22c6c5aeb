//! AOCR - AI Offerings Competitive Research
//!
//! Researches the AI offerings of a set of companies with a tool-calling
//! language model agent, compares them against a parent company and renders
//! the findings as a Markdown report.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use aocr::models::AocrConfig;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = AocrConfig::default();
//! let orchestrator = aocr::build_orchestrator(&config)?;
//! let result = aocr::research(&orchestrator, &["Acme".to_string()], "Initech").await?;
//! aocr::report::export_markdown(&result, &config.report.output_path);
//! # Ok(())
//! # }
//! ```

pub use aocr_agents as agents;
pub use aocr_models as models;
pub use aocr_search as search;

pub mod report;

use std::sync::Arc;

use anyhow::{bail, Context};
use aocr_agents::{AgentError, ChatClient, LanguageModel, Orchestrator};
use aocr_models::config::AocrConfig;
use aocr_models::research::ResearchResult;
use aocr_search::{SearchClient, WebSearch};

pub const SEARCH_API_KEY_VAR: &str = "SERPER_API_KEY";
pub const LLM_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Build an Orchestrator from configuration.
///
/// API keys come from the config when set, otherwise from the environment.
pub fn build_orchestrator(config: &AocrConfig) -> Result<Orchestrator, anyhow::Error> {
    let search_key = resolve_api_key(config.search.api_key.as_deref(), SEARCH_API_KEY_VAR)?;
    let llm_key = resolve_api_key(config.llm.api_key.as_deref(), LLM_API_KEY_VAR)?;

    let search: Arc<dyn WebSearch> = Arc::new(
        SearchClient::new(&config.search, search_key).context("Failed to build search client")?,
    );
    let model: Arc<dyn LanguageModel> = Arc::new(
        ChatClient::new(&config.llm, llm_key).context("Failed to build chat client")?,
    );

    Ok(Orchestrator::new(search, model, config.llm.max_iterations))
}

/// Research `companies` and `parent_company` using the given orchestrator.
pub async fn research(
    orchestrator: &Orchestrator,
    companies: &[String],
    parent_company: &str,
) -> Result<ResearchResult, AgentError> {
    orchestrator.run(companies, parent_company).await
}

fn resolve_api_key(configured: Option<&str>, env_var: &str) -> Result<String, anyhow::Error> {
    if let Some(key) = configured.filter(|k| !k.trim().is_empty()) {
        return Ok(key.to_string());
    }
    match std::env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => bail!("Missing API key: set {env_var} or configure it in the config file"),
    }
}
