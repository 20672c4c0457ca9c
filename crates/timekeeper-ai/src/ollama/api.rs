//! AiClient trait implementation for OllamaClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::{OllamaClient, CHAT_PATH};

#[async_trait]
impl AiClient for OllamaClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, messages = messages.len(), "Ollama chat request");

        let response = self
            .http
            .post(self.config.endpoint(CHAT_PATH))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AiError::Timeout(e.to_string())
            } else {
                AiError::ParseError(e.to_string())
            }
        })?;

        let parsed = self.parse_response(json)?;
        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            total_tokens = parsed.usage.total_tokens(),
            "Ollama chat response"
        );
        Ok(parsed)
    }
}

fn transport_error(e: reqwest::Error) -> AiError {
    let cause = error_chain(&e);
    if e.is_timeout() {
        AiError::Timeout(cause)
    } else {
        AiError::NetworkError(cause)
    }
}

/// Render an error with its `source()` chain; reqwest keeps the root cause there.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}
