use crate::llm::Content;
use serde::Serialize;

pub const CHAT_FAILED: &str = "chat failed";
pub const PAGE_NOT_FOUND: &str = "找不到页面";

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub content: Content,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
