//! Configuration schema types for Timekeeper.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that reproduce the flag-less,
//! file-less behaviour of the bot.

mod model;
mod router;
mod system;

pub use model::*;
pub use router::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Timekeeper.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimekeeperConfig {
    pub model: ModelConfig,
    pub router: RouterConfig,
    pub logging: LoggingConfig,
}
