//! Built-in model service settings, shared by the config schema and the client.

/// Where a stock Ollama install listens.
pub const OLLAMA_BASE_URL: &str = "http://localhost:11434";

pub const OLLAMA_MODEL: &str = "llama3.2:latest";
