//! Client for Ollama's native `/api/chat` endpoint.

use super::client::{LlmClient, build_http_client};
use super::types::{ChatMessage, Content};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        Ok(Self {
            http: build_http_client(config.timeout_secs)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        })
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn invoke(&self, messages: Vec<ChatMessage>) -> Result<Content> {
        let url = self.chat_url();
        debug!("Sending {} messages to {}", messages.len(), url);

        let body = OllamaChatRequest {
            model: &self.model,
            messages: &messages,
            stream: false,
        };

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Ollama returned {}: {}",
                status, detail
            )));
        }

        let mut reply: Value = response.json().await?;

        // Native replies wrap the assistant message; anything else is passed through whole.
        let reply = match reply.get_mut("message").map(Value::take) {
            Some(message) if !message.is_null() => message,
            _ => reply,
        };

        Ok(Content::from_reply(reply))
    }
}
