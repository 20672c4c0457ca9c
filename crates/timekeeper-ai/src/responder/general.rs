//! Model-backed replies.

use std::sync::Arc;

use timekeeper_common::locale::MODEL_ERROR;
use tracing::error;

use crate::{AiClient, Message};

/// Forwards the conversation to the model and relays its answer verbatim.
pub struct GeneralResponder {
    client: Arc<dyn AiClient>,
}

impl GeneralResponder {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self { client }
    }

    pub async fn respond(&self, messages: &[Message]) -> Message {
        match self.client.send_message(messages).await {
            Ok(response) => Message::assistant(response.content),
            Err(e) => {
                error!("Model error: {e}");
                Message::assistant(MODEL_ERROR)
            }
        }
    }
}
