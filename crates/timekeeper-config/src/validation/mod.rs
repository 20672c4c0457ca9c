//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod model;
mod router;


use crate::schema::TimekeeperConfig;
use timekeeper_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TimekeeperConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    model::validate_model(&mut errors, config);
    router::validate_router(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
