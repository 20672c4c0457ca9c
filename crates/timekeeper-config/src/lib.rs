//! Timekeeper configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use defaults so partial configs (or no config file at all) work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use timekeeper_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::TimekeeperConfig;

use std::path::Path;

use timekeeper_common::ConfigError;

/// Environment variable naming the Ollama server, as the Ollama CLI reads it.
pub const OLLAMA_HOST_ENV: &str = "OLLAMA_HOST";

/// Load, override, and validate the config.
///
/// With `path` set, the file must exist. Without it, `config.toml` is read
/// from the OS config directory and created with defaults if missing.
pub fn load_config(path: Option<&Path>) -> Result<TimekeeperConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_ollama_host(&mut config, std::env::var(OLLAMA_HOST_ENV).ok());
    validation::validate(&config)?;
    Ok(config)
}

/// Replace `model.base_url` with an `OLLAMA_HOST`-style value.
///
/// A bare `host:port` gets an `http://` scheme; trailing slashes are dropped.
pub fn apply_ollama_host(config: &mut TimekeeperConfig, host: Option<String>) {
    let Some(host) = host else {
        return;
    };
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() {
        return;
    }

    let url = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    };
    tracing::debug!(base_url = %url, "model endpoint taken from {OLLAMA_HOST_ENV}");
    config.model.base_url = url;
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TimekeeperConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
