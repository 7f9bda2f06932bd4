//! Configuration file support for nvd-query.
//!
//! Provides YAML-based configuration through `nvd.config.yml` files,
//! including data structures, file loading, and validation.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::error::NvdError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nvd.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    /// Delay between page requests, in seconds
    pub delay: Option<f64>,
    pub proxy: Option<String>,
    pub output: Option<String>,
    pub pretty: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).map_err(|e| {
        NvdError::Configuration {
            message: format!("cannot use config file {}: {}", path.display(), e),
            hint: "Check that the file exists and is readable.".to_string(),
        }
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| NvdError::Configuration {
        message: format!("failed to read config file {}: {}", path.display(), e),
        hint: "Check that the file exists and is readable.".to_string(),
    })?;

    // An empty file deserializes to null, which means "no settings".
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| NvdError::Configuration {
            message: format!("failed to parse config file {}: {}", path.display(), e),
            hint: "Ensure the file contains valid YAML syntax.".to_string(),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if std::fs::symlink_metadata(&config_path).is_err() {
        return Ok(None);
    }

    log::debug!("using config file {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(delay) = config.delay {
        if !delay.is_finite() || delay < 0.0 {
            return Err(NvdError::Configuration {
                message: format!("delay must be a non-negative number of seconds, got {}", delay),
                hint: "Use e.g. `delay: 0.6` together with an api_key.".to_string(),
            }
            .into());
        }
    }

    if let Some(output) = config.output.as_deref() {
        output
            .parse::<OutputFormat>()
            .map_err(|message| NvdError::Configuration {
                message,
                hint: "Set `output` to json or jsonl.".to_string(),
            })?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        log::warn!("unknown config field '{}' will be ignored", key);
    }
}
