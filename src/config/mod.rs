//! Configuration module
//!
//! Handles loading and saving of tasklist.toml configuration files and
//! resolving which database file a command should use.

mod types;

pub use types::Config;

use crate::error::{Result, TasklistError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file looked up when no --config path is given
pub const DEFAULT_CONFIG_FILE: &str = "tasklist.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        TasklistError::Config(format!(
            "Cannot read config from '{}': {}. Run 'tasklist config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| TasklistError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Resolve the database path for this invocation.
///
/// Precedence: the --database flag, then the config file (an explicit
/// --config path must exist; the default tasklist.toml may be absent), then
/// the built-in default.
pub fn database_path(
    database: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = database {
        return Ok(path);
    }

    match config_path {
        Some(path) => Ok(load(&path)?.database),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Ok(load(&default_path)?.database)
            } else {
                Ok(Config::default().database)
            }
        }
    }
}
