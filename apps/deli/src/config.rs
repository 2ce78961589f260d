//! # Run Configuration
//!
//! Loads a [`DetectorConfig`] from an optional TOML file and applies CLI
//! overrides on top.
//!
//! ```toml
//! theta = 17.0
//! initial_avg = 0.0
//! initial_std = 0.0
//! max_component_size = 20000
//! ```

use deli_core::{DeliError, DetectorConfig};
use std::path::Path;

/// Maximum size of a configuration file (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Parameters given on the command line. `None` keeps the file/default value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub theta: Option<f64>,
    pub avg: Option<f64>,
    pub std: Option<f64>,
}

/// Parse a configuration from TOML text.
pub fn parse_config(text: &str) -> Result<DetectorConfig, DeliError> {
    toml::from_str(text).map_err(|e| DeliError::ConfigError(e.to_string()))
}

/// Load the configuration file if given, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> Result<DetectorConfig, DeliError> {
    let Some(path) = path else {
        return Ok(DetectorConfig::default());
    };

    let metadata = std::fs::metadata(path).map_err(|e| {
        DeliError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
    })?;
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(DeliError::ConfigError(format!(
            "Config file size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_CONFIG_FILE_SIZE
        )));
    }

    let text = std::fs::read_to_string(path).map_err(|e| {
        DeliError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
    })?;
    parse_config(&text)
}

/// Apply CLI overrides and validate the result.
pub fn resolve(mut config: DetectorConfig, overrides: Overrides) -> Result<DetectorConfig, DeliError> {
    if let Some(theta) = overrides.theta {
        config.theta = theta;
    }
    if let Some(avg) = overrides.avg {
        config.initial_avg = avg;
    }
    if let Some(std) = overrides.std {
        config.initial_std = std;
    }
    config.validate()?;
    Ok(config)
}

/// Render the default configuration as TOML.
pub fn default_config_toml() -> Result<String, DeliError> {
    toml::to_string_pretty(&DetectorConfig::default())
        .map_err(|e| DeliError::ConfigError(e.to_string()))
}
