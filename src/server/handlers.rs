use super::types::{CHAT_FAILED, ChatResponse, ErrorResponse, PAGE_NOT_FOUND};
use crate::{
    llm::{LlmClient, coffee_dialogue},
    logic::{self, HealthStatus, PingMessage},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(logic::get_health_status())
}

pub async fn ping() -> Json<PingMessage> {
    Json(logic::get_ping_message())
}

pub async fn chat(
    State(state): State<AppState>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Forwarding coffee dialogue prompt to inference service");

    match state.llm.invoke(coffee_dialogue()).await {
        Ok(content) => Ok(Json(ChatResponse { content })),
        Err(e) => {
            error!("/api/chat error: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(CHAT_FAILED)),
            ))
        }
    }
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(PAGE_NOT_FOUND)))
}
