use async_trait::async_trait;
use echopal_backend::{
    Error, Result,
    llm::{ChatMessage, Content, LlmClient},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock LLM client for testing
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub reply: Option<Content>,
    pub error: Option<String>,
    pub delay: Option<Duration>,
    pub requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            reply: None,
            error: None,
            delay: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.reply = Some(Content::Text(text.to_string()));
        self
    }

    /// Replies the way the collaborator would, going through the `content` extraction.
    pub fn with_reply(mut self, reply: Value) -> Self {
        self.reply = Some(Content::from_reply(reply));
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn invoke(&self, messages: Vec<ChatMessage>) -> Result<Content> {
        self.requests.lock().unwrap().push(messages);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        self.reply
            .clone()
            .ok_or_else(|| Error::llm("No mock reply configured"))
    }
}
