//! Model service configuration.

use serde::{Deserialize, Serialize};
use timekeeper_common::defaults::{OLLAMA_BASE_URL, OLLAMA_MODEL};

/// Connection settings for the chat-completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub base_url: String,
    pub name: String,
    /// Sampling temperature (valid range: 0.0-2.0). Zero keeps replies deterministic.
    pub temperature: f64,
    /// Whole-request timeout in seconds (valid range: 1-3600).
    pub request_timeout_secs: u32,
    /// Connect timeout in seconds (valid range: 1-300).
    pub connect_timeout_secs: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: OLLAMA_BASE_URL.to_string(),
            name: OLLAMA_MODEL.to_string(),
            temperature: 0.0,
            request_timeout_secs: 120,
            connect_timeout_secs: 10,
        }
    }
}
