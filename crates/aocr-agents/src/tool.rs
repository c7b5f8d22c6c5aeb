use std::sync::Arc;

use aocr_search::WebSearch;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::AgentError;
use crate::prompts::WEB_SEARCH_DESCRIPTION;

pub const WEB_SEARCH_TOOL: &str = "web_search";

/// Function schema advertised to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON Schema for the call arguments.
    pub parameters: Value,
}

/// A capability the model may call during an agent run.
#[async_trait]
pub trait Tool: Send + Sync {
    fn spec(&self) -> ToolSpec;

    /// Execute with the decoded arguments and return the observation text.
    ///
    /// `AgentError::InvalidToolCall` is reported back to the model; any other
    /// error aborts the run.
    async fn call(&self, arguments: &Value) -> Result<String, AgentError>;
}

/// Exposes a [`WebSearch`] backend to the model. The observation is the raw
/// provider body.
pub struct WebSearchTool {
    search: Arc<dyn WebSearch>,
}

impl WebSearchTool {
    pub fn new(search: Arc<dyn WebSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: WEB_SEARCH_TOOL.to_string(),
            description: WEB_SEARCH_DESCRIPTION.to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query, e.g. a company name plus a topic"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, arguments: &Value) -> Result<String, AgentError> {
        let query = arguments
            .get("query")
            .and_then(Value::as_str)
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| {
                AgentError::InvalidToolCall(format!(
                    "{WEB_SEARCH_TOOL} requires a non-empty `query` string"
                ))
            })?;

        debug!(query, "web_search tool call");
        Ok(self.search.search(query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StaticSearch;

    #[test]
    fn spec_advertises_query_parameter() {
        let tool = WebSearchTool::new(Arc::new(StaticSearch::with_body("{}")));
        let spec = tool.spec();
        assert_eq!(spec.name, "web_search");
        assert!(spec.description.contains("AI offerings and case studies"));
        assert_eq!(spec.parameters["required"][0], "query");
    }

    #[tokio::test]
    async fn call_returns_raw_search_body() {
        let search = Arc::new(StaticSearch::with_body(r#"{"organic": []}"#));
        let tool = WebSearchTool::new(search.clone());

        let output = tool
            .call(&serde_json::json!({"query": "Acme vision"}))
            .await
            .unwrap();

        assert_eq!(output, r#"{"organic": []}"#);
        assert_eq!(search.queries(), vec!["Acme vision".to_string()]);
    }

    #[tokio::test]
    async fn call_rejects_missing_query() {
        let search = Arc::new(StaticSearch::with_body("{}"));
        let tool = WebSearchTool::new(search.clone());

        let result = tool.call(&serde_json::json!({"q": "Acme"})).await;
        assert!(matches!(result, Err(AgentError::InvalidToolCall(_))));

        let result = tool.call(&serde_json::json!({"query": "  "})).await;
        assert!(matches!(result, Err(AgentError::InvalidToolCall(_))));
        assert!(search.queries().is_empty());
    }

    #[tokio::test]
    async fn search_failure_propagates() {
        let tool = WebSearchTool::new(Arc::new(StaticSearch::failing()));
        let result = tool.call(&serde_json::json!({"query": "Acme"})).await;
        assert!(matches!(result, Err(AgentError::Search(_))));
    }
}
