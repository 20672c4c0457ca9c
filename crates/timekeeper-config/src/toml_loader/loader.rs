//! Reading the config file, and seeding it on first run.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::schema::TimekeeperConfig;
use timekeeper_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// `<os config dir>/timekeeper/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("timekeeper").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no config directory for this platform".into()))
}

/// Parse a TOML config file. Missing fields take their defaults; values are not validated.
pub fn load_from_path(path: &Path) -> Result<TimekeeperConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };

    let config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Write the commented template to `path`, creating parent directories.
///
/// Never overwrites: an existing file is left alone and reported as `Ok(false)`.
pub fn write_template(path: &Path) -> Result<bool, ConfigError> {
    let write_error = |source: std::io::Error| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(write_error(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_error)?;

    info!("created default config at {}", path.display());
    Ok(true)
}

/// Load from [`config_path`], seeding the template when the file is absent.
pub fn load_default() -> Result<TimekeeperConfig, ConfigError> {
    let path = config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_template(&path)?;
            Ok(TimekeeperConfig::default())
        }
        other => other,
    }
}
