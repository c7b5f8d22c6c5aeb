//! Test support: scripted stand-ins for the model and the search provider.
//!
//! `ScriptedModel` answers through a closure (or a fixed reply queue) and
//! records every request so tests can inspect the transcript the agent sent.
//! `StaticSearch` returns canned provider bodies and records queries.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use aocr_search::{SearchError, WebSearch};
use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{ChatMessage, LanguageModel};
use crate::tool::ToolSpec;

type Responder =
    dyn Fn(&[ChatMessage], &[ToolSpec]) -> Result<ChatMessage, AgentError> + Send + Sync;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One `chat` call as seen by a [`ScriptedModel`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub messages: Vec<ChatMessage>,
    /// Names of the tools offered with the request.
    pub tools: Vec<String>,
}

impl RecordedRequest {
    /// Content of the last user message, if any.
    pub fn last_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == crate::llm::Role::User)
            .and_then(|m| m.content.as_deref())
    }
}

/// A [`LanguageModel`] driven by a closure.
pub struct ScriptedModel {
    responder: Box<Responder>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedModel {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&[ChatMessage], &[ToolSpec]) -> Result<ChatMessage, AgentError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with the same text.
    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_, _| Ok(ChatMessage::assistant(text.as_str())))
    }

    /// Replays `replies` in order, then fails.
    pub fn sequence(replies: Vec<ChatMessage>) -> Self {
        let queue = Mutex::new(VecDeque::from(replies));
        Self::new(move |_, _| {
            lock(&queue)
                .pop_front()
                .ok_or_else(|| AgentError::Parse("Scripted replies exhausted".to_string()))
        })
    }

    /// Every call fails as if the provider returned HTTP 500.
    pub fn failing() -> Self {
        Self::new(|_, _| {
            Err(AgentError::Provider {
                status: 500,
                body: "simulated provider outage".to_string(),
            })
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    fn model_name(&self) -> &str {
        "scripted"
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolSpec],
    ) -> Result<ChatMessage, AgentError> {
        lock(&self.requests).push(RecordedRequest {
            messages: messages.to_vec(),
            tools: tools.iter().map(|t| t.name.clone()).collect(),
        });
        (self.responder)(messages, tools)
    }
}

type BodyFn = dyn Fn(&str) -> Result<String, SearchError> + Send + Sync;

/// A [`WebSearch`] that builds its response from the query.
pub struct StaticSearch {
    body: Box<BodyFn>,
    queries: Mutex<Vec<String>>,
}

impl StaticSearch {
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&str) -> Result<String, SearchError> + Send + Sync + 'static,
    {
        Self {
            body: Box::new(body),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_body(body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_| Ok(body.clone()))
    }

    /// Every search fails before a response arrives.
    pub fn failing() -> Self {
        Self::new(|_| Err(SearchError::Parse("simulated search outage".to_string())))
    }

    pub fn queries(&self) -> Vec<String> {
        lock(&self.queries).clone()
    }
}

#[async_trait]
impl WebSearch for StaticSearch {
    async fn search(&self, query: &str) -> Result<String, SearchError> {
        lock(&self.queries).push(query.to_string());
        (self.body)(query)
    }
}

/// A Serper-style response body with one organic entry per `(title, link)`.
pub fn organic_body(entries: &[(&str, &str)]) -> String {
    let organic: Vec<serde_json::Value> = entries
        .iter()
        .map(|(title, link)| {
            serde_json::json!({
                "title": title,
                "link": link,
                "snippet": format!("About {title}"),
            })
        })
        .collect();
    serde_json::json!({ "organic": organic }).to_string()
}
