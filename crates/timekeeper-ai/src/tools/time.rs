//! The `get_current_time` tool.

use chrono::{DateTime, SecondsFormat, Utc};

use super::clock::Clock;
use crate::ToolError;

pub const CURRENT_TIME_TOOL: &str = "get_current_time";

/// Return the current UTC time as `{"utc": "<ISO-8601>"}`.
pub fn get_current_time(clock: &dyn Clock) -> Result<serde_json::Value, ToolError> {
    let now = clock.now_utc()?;
    Ok(serde_json::json!({ "utc": format_utc(now) }))
}

/// ISO-8601 with microseconds and an explicit `+00:00` offset.
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, false)
}
