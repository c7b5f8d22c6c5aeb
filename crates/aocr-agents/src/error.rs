use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Model response parse error: {0}")]
    Parse(String),

    #[error("Invalid tool call: {0}")]
    InvalidToolCall(String),

    #[error("Search error: {0}")]
    Search(#[from] aocr_search::SearchError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
