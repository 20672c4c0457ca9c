use chrono::{DateTime, Utc};

use crate::ToolError;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> Result<DateTime<Utc>, ToolError>;
}

/// The operating-system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> Result<DateTime<Utc>, ToolError> {
        Ok(Utc::now())
    }
}
