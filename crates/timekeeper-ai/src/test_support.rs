//! Fakes shared by the unit tests in this crate.

use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing_subscriber::fmt::MakeWriter;

use crate::{AiClient, AiError, AiResponse, Clock, Message, TokenUsage, ToolError};

/// A clock frozen at one instant.
pub(crate) struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at(rfc3339: &str) -> Self {
        let instant = DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc);
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> Result<DateTime<Utc>, ToolError> {
        Ok(self.0)
    }
}

/// A clock that always fails.
pub(crate) struct FailingClock;

impl Clock for FailingClock {
    fn now_utc(&self) -> Result<DateTime<Utc>, ToolError> {
        Err(ToolError::Clock("rtc read failed".into()))
    }
}

/// A model that answers from a fixed script and records what it was sent.
pub(crate) struct ScriptedClient {
    reply: Mutex<Option<Result<String, AiError>>>,
    pub(crate) seen: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedClient {
    pub(crate) fn replying(text: &str) -> Self {
        Self {
            reply: Mutex::new(Some(Ok(text.to_string()))),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(err: AiError) -> Self {
        Self {
            reply: Mutex::new(Some(Err(err))),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        let reply = self
            .reply
            .lock()
            .unwrap()
            .take()
            .expect("ScriptedClient called more than once");
        reply.map(|content| AiResponse {
            content,
            usage: TokenUsage::default(),
        })
    }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route this thread's log events into a buffer until the guard drops.
pub(crate) fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
