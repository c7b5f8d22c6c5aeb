use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::AgentError;
use crate::llm::{ChatMessage, LanguageModel, ToolCall};
use crate::prompts::research_system_prompt;
use crate::tool::{Tool, ToolSpec};

/// Answer used when the model finishes with no content at all.
pub const NO_OFFERINGS_FOUND: &str = "No detailed AI offerings found";

/// Answer used when the model keeps requesting tools past the iteration cap.
pub const ITERATION_LIMIT_REACHED: &str = "Agent stopped due to iteration limit.";

/// A tool-calling research agent: one instruction in, one text answer out.
///
/// The model decides whether and how often to call the registered tools. Each
/// round trip sends the full transcript, tool observations included.
pub struct ResearchAgent {
    model: Arc<dyn LanguageModel>,
    tools: Vec<Arc<dyn Tool>>,
    system_prompt: String,
    max_iterations: usize,
}

impl ResearchAgent {
    pub fn new(
        model: Arc<dyn LanguageModel>,
        tools: Vec<Arc<dyn Tool>>,
        max_iterations: usize,
    ) -> Self {
        Self {
            model,
            tools,
            system_prompt: research_system_prompt(),
            max_iterations,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.spec().name).collect()
    }

    pub async fn run(&self, instruction: &str) -> Result<String, AgentError> {
        let specs: Vec<ToolSpec> = self.tools.iter().map(|t| t.spec()).collect();
        let mut messages = vec![
            ChatMessage::system(self.system_prompt.as_str()),
            ChatMessage::user(instruction),
        ];

        for iteration in 1..=self.max_iterations {
            let reply = self.model.chat(&messages, &specs).await?;
            let calls = reply.pending_tool_calls().to_vec();

            if calls.is_empty() {
                debug!(iteration, model = self.model.model_name(), "Agent finished");
                return Ok(reply
                    .content
                    .unwrap_or_else(|| NO_OFFERINGS_FOUND.to_string()));
            }

            messages.push(reply);
            for call in &calls {
                let observation = self.invoke(call, &specs).await?;
                messages.push(ChatMessage::tool_result(call.id.as_str(), observation));
            }
        }

        warn!(max_iterations = self.max_iterations, "Agent hit iteration limit");
        Ok(ITERATION_LIMIT_REACHED.to_string())
    }

    /// Run one tool call. Bad calls become observations for the model;
    /// tool faults propagate.
    async fn invoke(&self, call: &ToolCall, specs: &[ToolSpec]) -> Result<String, AgentError> {
        let name = call.function.name.as_str();

        let Some(tool) = self.tools.iter().find(|t| t.spec().name == name) else {
            let available: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
            warn!(tool = name, "Model requested unknown tool");
            return Ok(format!(
                "{name} is not a valid tool, try one of [{}].",
                available.join(", ")
            ));
        };

        let raw_arguments = call.function.arguments.trim();
        let arguments: Value = if raw_arguments.is_empty() {
            Value::Object(Default::default())
        } else {
            match serde_json::from_str(raw_arguments) {
                Ok(value) => value,
                Err(e) => return Ok(format!("Invalid arguments for {name}: {e}")),
            }
        };

        info!(tool = name, "Agent invoking tool");
        match tool.call(&arguments).await {
            Ok(output) => Ok(output),
            Err(AgentError::InvalidToolCall(reason)) => {
                Ok(format!("Invalid arguments for {name}: {reason}"))
            }
            Err(e) => Err(e),
        }
    }
}
