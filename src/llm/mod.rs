mod client;
mod ollama;
mod prompts;
mod types;

pub use client::{LlmClient, OpenAiClient, create_llm_client};
pub use ollama::OllamaClient;
pub use prompts::{COFFEE_DIALOGUE_PROMPT, TUTOR_SYSTEM_PROMPT, coffee_dialogue};
pub use types::{ChatMessage, Content, Role};
