use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use echopal_backend::{
    config::LlmConfig,
    llm::LlmClient,
    server::{AppState, router},
};
use serde_json::Value;
use std::io;
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for `oneshot`
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Build the production router around any collaborator
pub fn create_test_app(llm: impl LlmClient + 'static) -> Router {
    router(AppState::new(Arc::new(llm)))
}

/// Send one request through the router and decode the JSON body
pub async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send_request(app, request).await
}

pub async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// LLM config pointing at a mock server
pub fn create_test_llm_config(provider: &str, base_url: &str) -> LlmConfig {
    LlmConfig {
        provider: provider.to_string(),
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "llama3.2".to_string(),
        timeout_secs: Some(5),
    }
}

/// Log output captured by `capture_logs`
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    /// Lines logged at the given level, e.g. "ERROR"
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.split_whitespace().next() == Some(level))
            .map(str::to_string)
            .collect()
    }
}

pub struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Route this thread's logs into a buffer until the guard drops.
/// Pair with the default current-thread `#[tokio::test]` runtime.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
