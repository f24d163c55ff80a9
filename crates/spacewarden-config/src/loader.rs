//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::model::Config;
use crate::validate;

/// Load and validate the configuration file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read,
/// [`ConfigError::Parse`] when it is not valid JSON, and
/// [`ConfigError::InvalidField`] when a field fails validation.
pub fn load(path: &Path) -> ConfigResult<Config> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        operation: "config.read",
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate::validate(&config)?;
    Ok(config)
}
