use serde::{Deserialize, Serialize};

/// Top-level configuration for AOCR. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AocrConfig {
    pub search: SearchConfig,
    pub llm: LlmConfig,
    pub report: ReportConfig,
}

/// Configuration for the web search provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Serper-compatible search endpoint.
    pub endpoint: String,
    /// Falls back to the `SERPER_API_KEY` environment variable.
    pub api_key: Option<String>,
    /// Appended verbatim to every query.
    pub query_suffix: String,
    /// Result count requested from the provider.
    pub num_results: u32,
    pub timeout_seconds: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://google.serper.dev/search".to_string(),
            api_key: None,
            query_suffix: " AI offerings case studies".to_string(),
            num_results: 7,
            timeout_seconds: 30,
        }
    }
}

/// Configuration for the hosted chat model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible chat completions endpoint.
    pub endpoint: String,
    /// Falls back to the `GROQ_API_KEY` environment variable.
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub timeout_seconds: u64,
    /// Upper bound on model round-trips per agent run.
    pub max_iterations: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            api_key: None,
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.1,
            timeout_seconds: 120,
            max_iterations: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub output_path: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: "ai_competitive_research.md".to_string(),
        }
    }
}
