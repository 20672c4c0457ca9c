//! Ollama client struct, request building, and response parsing.

use crate::{AiError, AiResponse, Message, TokenUsage};

use super::config::OllamaConfig;

pub(crate) const CHAT_PATH: &str = "api/chat";
pub(crate) const TAGS_PATH: &str = "api/tags";

/// Ollama API client.
///
/// Built once at startup and shared read-only for the life of the process.
pub struct OllamaClient {
    pub(crate) config: OllamaConfig,
    pub(crate) http: reqwest::Client,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Whether the server answers its model-listing endpoint.
    pub async fn is_available(&self) -> bool {
        match self.http.get(self.config.endpoint(TAGS_PATH)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Ollama availability probe failed");
                false
            }
        }
    }

    /// Build the JSON request body for the chat endpoint.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let msgs: Vec<_> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role.as_str(),
                    "content": msg.content,
                })
            })
            .collect();

        serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "stream": false,
            "options": {
                "temperature": self.config.temperature,
            },
        })
    }

    /// Parse a non-streaming chat response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        if let Some(error) = json["error"].as_str() {
            return Err(AiError::ApiError(error.to_string()));
        }

        let content = json["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AiError::ParseError("response has no message.content".into()))?;

        let usage = TokenUsage {
            input_tokens: json["prompt_eval_count"].as_u64().unwrap_or(0),
            output_tokens: json["eval_count"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
