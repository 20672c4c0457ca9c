//! Conversation engine for Timekeeper.
//!
//! Provides:
//! - an Ollama chat client behind the `AiClient` trait
//! - keyword-based intent routing
//! - the time and general responders
//! - a dispatcher that runs one turn end to end

pub mod dispatch;
pub mod ollama;
pub mod responder;
pub mod router;
pub mod tools;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;

pub use dispatch::Dispatcher;
pub use ollama::{OllamaClient, OllamaConfig};
pub use responder::{GeneralResponder, TimeResponder};
pub use router::{Intent, IntentRouter};
pub use tools::{Clock, SystemClock};

/// A chat-completion service.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout: {0}")]
    Timeout(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("clock unavailable: {0}")]
    Clock(String),
    #[error("tool result missing field `{0}`")]
    MissingField(&'static str),
}
