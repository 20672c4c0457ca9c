pub mod defaults;
pub mod errors;
pub mod locale;

pub use errors::{ConfigError, TimekeeperError};

pub type Result<T> = std::result::Result<T, TimekeeperError>;
