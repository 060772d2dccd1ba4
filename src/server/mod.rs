pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{CHAT_FAILED, ChatResponse, ErrorResponse, PAGE_NOT_FOUND};

use crate::{Result, config::Config, llm::create_llm_client};
use axum::{Router, routing::get};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Assembles the routes, the 404 fallback and the middleware stack.
///
/// A declared path hit with an undeclared method also lands on the 404 fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(handlers::health).fallback(handlers::not_found),
        )
        .route(
            "/api/ping",
            get(handlers::ping).fallback(handlers::not_found),
        )
        .route(
            "/api/chat",
            get(handlers::chat).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize inference client once; every chat request shares it
    let llm = create_llm_client(&config.llm)?;

    let app = router(AppState::new(llm));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();

    info!("EchoPal backend server listening on http://localhost:{}/", port);

    axum::serve(listener, app).await?;

    Ok(())
}
