//! Deterministic time replies.

use timekeeper_common::locale::{TIME_ERROR, TIME_REPLY_PREFIX};
use tracing::error;

use crate::tools::{get_current_time, Clock, SystemClock, CURRENT_TIME_TOOL};
use crate::{Message, ToolError};

/// Answers with the current UTC time, ignoring the conversation.
pub struct TimeResponder {
    clock: Box<dyn Clock>,
}

impl TimeResponder {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn respond(&self) -> Message {
        match self.current_utc() {
            Ok(utc) => Message::assistant(format!("{TIME_REPLY_PREFIX}{utc}")),
            Err(e) => {
                error!(tool = CURRENT_TIME_TOOL, "Time error: {e}");
                Message::assistant(TIME_ERROR)
            }
        }
    }

    fn current_utc(&self) -> Result<String, ToolError> {
        let result = get_current_time(self.clock.as_ref())?;
        result["utc"]
            .as_str()
            .map(String::from)
            .ok_or(ToolError::MissingField("utc"))
    }
}

impl Default for TimeResponder {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_logs, FailingClock, FixedClock};
    use crate::Role;

    #[test]
    fn reply_uses_template_and_iso_timestamp() {
        let responder = TimeResponder::new(Box::new(FixedClock::at("2024-01-15T12:34:56.789012Z")));
        let reply = responder.respond();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(
            reply.content,
            "Текущее время UTC: 2024-01-15T12:34:56.789012+00:00"
        );
    }

    #[test]
    fn system_clock_reply_parses_back() {
        let reply = TimeResponder::default().respond();
        let stamp = reply
            .content
            .strip_prefix(TIME_REPLY_PREFIX)
            .expect("template prefix");
        assert!(stamp.ends_with("+00:00"), "got {stamp}");
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn clock_failure_gives_fixed_message_and_logs_cause() {
        let (logs, _guard) = capture_logs();

        let reply = TimeResponder::new(Box::new(FailingClock)).respond();

        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "Ошибка определения времени");
        let logs = logs.contents();
        assert!(logs.contains("ERROR"), "logs: {logs}");
        assert!(logs.contains("rtc read failed"), "logs: {logs}");
    }
}
