//! The two turn handlers.
//!
//! Both always produce an assistant message: faults are logged and
//! replaced with a fixed user-facing error text.

mod general;
mod time;

pub use general::GeneralResponder;
pub use time::TimeResponder;
