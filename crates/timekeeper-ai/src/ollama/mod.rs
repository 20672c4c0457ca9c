//! Ollama chat client.
//!
//! Implements the `AiClient` trait against the Ollama chat endpoint
//! (`POST {base_url}/api/chat`) with streaming disabled.

mod api;
mod client;
mod config;


pub use client::OllamaClient;
pub use config::OllamaConfig;
