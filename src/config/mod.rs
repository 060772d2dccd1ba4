mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration from `CONFIG_PATH` (or `config.yaml`) and applies
/// the `PORT` override. A missing default file falls back to built-in defaults;
/// a missing file named explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => from_yaml_str(&config_str)?,
        Err(e) if explicit_path.is_none() && e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.server.port = resolve_port(env::var("PORT").ok().as_deref(), config.server.port)?;

    Ok(config)
}

pub fn from_yaml_str(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Picks the listening port: a non-empty `PORT` value wins over the configured one.
pub fn resolve_port(env_value: Option<&str>, configured: u16) -> Result<u16> {
    match env_value.map(str::trim) {
        None | Some("") => Ok(configured),
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", raw))),
    }
}
