//! Constant payloads for the liveness endpoints.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingMessage {
    pub message: String,
}

pub fn get_health_status() -> HealthStatus {
    HealthStatus {
        status: "ok".to_string(),
    }
}

pub fn get_ping_message() -> PingMessage {
    PingMessage {
        message: "pong".to_string(),
    }
}
