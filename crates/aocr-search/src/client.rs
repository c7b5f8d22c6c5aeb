use std::time::Duration;

use aocr_models::config::SearchConfig;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::SearchError;

/// A web search backend. Mockable for testing.
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Run one search and return the provider's raw response body.
    async fn search(&self, query: &str) -> Result<String, SearchError>;
}

/// Serper-compatible search client.
///
/// The response status is not inspected: whatever body comes back is handed
/// to the caller, and error payloads surface when the body is parsed.
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    query_suffix: String,
    num_results: u32,
}

impl SearchClient {
    pub fn new(config: &SearchConfig, api_key: impl Into<String>) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: api_key.into(),
            query_suffix: config.query_suffix.clone(),
            num_results: config.num_results,
        })
    }

    /// The query string actually sent to the provider.
    pub fn full_query(&self, query: &str) -> String {
        format!("{query}{}", self.query_suffix)
    }
}

#[async_trait]
impl WebSearch for SearchClient {
    async fn search(&self, query: &str) -> Result<String, SearchError> {
        let body = serde_json::json!({
            "q": self.full_query(query),
            "num": self.num_results,
        });

        debug!(query, endpoint = %self.endpoint, "Web search");

        let response = self
            .http
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, query, "Search provider returned non-success status");
        }

        Ok(response.text().await?)
    }
}
