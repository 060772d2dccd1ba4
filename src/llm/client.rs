use super::ollama::OllamaClient;
use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// A chat-capable inference collaborator.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn invoke(&self, messages: Vec<ChatMessage>) -> Result<Content>;
}

/// Builds the client named by `config.provider`. Called once at startup.
pub fn create_llm_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
    let client: Arc<dyn LlmClient> = match config.provider.as_str() {
        "ollama" => Arc::new(OllamaClient::new(config.clone())?),
        "openai" => Arc::new(OpenAiClient::new(config.clone())?),
        other => {
            return Err(Error::UnknownProvider {
                provider: other.to_string(),
            });
        }
    };

    info!(
        "Using {} inference at {} with model {}",
        config.provider, config.base_url, config.model
    );

    Ok(client)
}

pub(crate) fn build_http_client(timeout_secs: Option<u64>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Talks to any OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        // Zero elapsed budget: a rate-limited call fails on the first attempt
        let no_retry = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        let client = Client::with_config(openai_config)
            .with_http_client(build_http_client(config.timeout_secs)?)
            .with_backoff(no_retry);

        Ok(Self {
            client,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn invoke(&self, messages: Vec<ChatMessage>) -> Result<Content> {
        debug!("Creating chat completion with {} messages", messages.len());

        let mut openai_messages = Vec::with_capacity(messages.len());
        for msg in &messages {
            openai_messages.push(msg.to_openai_message()?);
        }

        let request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(openai_messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let text = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone());

        match text {
            Some(text) => Ok(Content::Text(text)),
            None => Ok(Content::Raw(serde_json::to_value(&response)?)),
        }
    }
}
