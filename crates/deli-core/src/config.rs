//! # Detector Configuration
//!
//! Tuning knobs for a detection run. Loaded by the app layer (TOML file plus
//! CLI overrides) and validated here.

use crate::primitives::{DEFAULT_THETA, MAX_CENTRALITY_COMPONENT_SIZE};
use crate::stats::{SizeStatistics, validate_theta};
use crate::DeliError;
use serde::{Deserialize, Serialize};

/// Parameters constant across a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Event-size multiplier applied to the standard deviation.
    pub theta: f64,
    /// Bootstrap mean component size for the first window.
    pub initial_avg: f64,
    /// Bootstrap standard deviation for the first window.
    pub initial_std: f64,
    /// Largest component the delineator will score.
    pub max_component_size: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            theta: DEFAULT_THETA,
            initial_avg: 0.0,
            initial_std: 0.0,
            max_component_size: MAX_CENTRALITY_COMPONENT_SIZE,
        }
    }
}

impl DetectorConfig {
    /// Check every parameter.
    pub fn validate(&self) -> Result<(), DeliError> {
        validate_theta(self.theta)?;
        self.initial_statistics()?;
        if self.max_component_size == 0 {
            return Err(DeliError::InvalidParameter(
                "max_component_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The bootstrap statistics for the first window.
    pub fn initial_statistics(&self) -> Result<SizeStatistics, DeliError> {
        SizeStatistics::new(self.initial_avg, self.initial_std)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = DetectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.initial_statistics().expect("stats"),
            SizeStatistics::ZERO
        );
    }

    #[test]
    fn invalid_values_rejected() {
        let mut config = DetectorConfig {
            theta: -2.0,
            ..DetectorConfig::default()
        };
        assert!(config.validate().is_err());

        config.theta = 3.0;
        config.initial_std = -1.0;
        assert!(config.validate().is_err());

        config.initial_std = 0.0;
        config.max_component_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config: DetectorConfig = serde_json::from_str(r#"{"theta": 17.0}"#).expect("parse");
        assert_eq!(config.theta, 17.0);
        assert_eq!(config.max_component_size, MAX_CENTRALITY_COMPONENT_SIZE);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<DetectorConfig, _> = serde_json::from_str(r#"{"tehta": 1.0}"#);
        assert!(result.is_err());
    }
}
