use anyhow::Result;
use echopal_backend::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

fn init_tracing(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load().await.unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let log_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = init_tracing(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Starting EchoPal backend, log level {}", log_level);

    server::run(config).await?;

    Ok(())
}
