//! Local tools the bot can call without the model.

mod clock;
mod time;

pub use clock::{Clock, SystemClock};
pub use time::{format_utc, get_current_time, CURRENT_TIME_TOOL};
