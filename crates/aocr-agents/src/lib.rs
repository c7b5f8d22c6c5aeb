pub mod agent;
pub mod error;
pub mod llm;
pub mod orchestrator;
pub mod prompts;
pub mod tool;

pub mod test_support;

pub use agent::ResearchAgent;
pub use error::AgentError;
pub use llm::{ChatClient, ChatMessage, LanguageModel};
pub use orchestrator::Orchestrator;
pub use tool::{Tool, ToolSpec, WebSearchTool};
