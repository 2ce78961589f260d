//! # Size-Statistics Tracker
//!
//! Running `(avg, std)` description of connected-component sizes.
//!
//! Statistics computed from window `t` set the classification threshold of
//! window `t + 1`; classification always uses figures one window older than
//! the graph it classifies.

#![allow(clippy::float_arithmetic)]

use crate::DeliError;
use serde::{Deserialize, Serialize};

/// Mean and population standard deviation of component sizes.
///
/// Both values are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeStatistics {
    avg: f64,
    std: f64,
}

impl SizeStatistics {
    /// The bootstrap statistics `(0, 0)`.
    ///
    /// With these, no component is small enough to be noise and the threshold
    /// collapses to 0.
    pub const ZERO: Self = Self { avg: 0.0, std: 0.0 };

    /// Create statistics from caller-supplied values.
    ///
    /// Returns `DeliError::InvalidParameter` for negative or non-finite input.
    pub fn new(avg: f64, std: f64) -> Result<Self, DeliError> {
        for (name, value) in [("avg", avg), ("std", std)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DeliError::InvalidParameter(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(Self { avg, std })
    }

    /// Compute population statistics over a list of component sizes.
    ///
    /// An empty list yields [`SizeStatistics::ZERO`] instead of NaN. The next
    /// window then runs with a zero threshold, so every surviving component
    /// counts as an event; callers should surface this case.
    #[must_use]
    pub fn from_sizes(sizes: &[usize]) -> Self {
        if sizes.is_empty() {
            return Self::ZERO;
        }

        let n = sizes.len() as f64;
        let avg = sizes.iter().map(|&s| s as f64).sum::<f64>() / n;
        let variance = sizes
            .iter()
            .map(|&s| {
                let d = s as f64 - avg;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            avg,
            std: variance.sqrt(),
        }
    }

    /// Mean component size.
    #[must_use]
    pub const fn avg(&self) -> f64 {
        self.avg
    }

    /// Population standard deviation of component sizes.
    #[must_use]
    pub const fn std(&self) -> f64 {
        self.std
    }

    /// Event threshold `theta * std + avg`.
    #[must_use]
    pub fn threshold(&self, theta: f64) -> f64 {
        theta * self.std + self.avg
    }
}

/// Check that an event-size multiplier is usable.
pub fn validate_theta(theta: f64) -> Result<(), DeliError> {
    if !theta.is_finite() || theta < 0.0 {
        return Err(DeliError::InvalidParameter(format!(
            "theta must be finite and non-negative, got {}",
            theta
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn population_statistics() {
        let stats = SizeStatistics::from_sizes(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert!(close(stats.avg(), 5.0));
        assert!(close(stats.std(), 2.0));
    }

    #[test]
    fn single_size_has_zero_spread() {
        let stats = SizeStatistics::from_sizes(&[6]);
        assert!(close(stats.avg(), 6.0));
        assert!(close(stats.std(), 0.0));
    }

    #[test]
    fn empty_sizes_yield_sentinel() {
        let stats = SizeStatistics::from_sizes(&[]);
        assert_eq!(stats, SizeStatistics::ZERO);
        assert!(!stats.avg().is_nan());
        assert!(close(stats.threshold(17.0), 0.0));
    }

    #[test]
    fn threshold_formula() {
        let stats = SizeStatistics::new(5.0, 1.0).expect("stats");
        assert!(close(stats.threshold(2.0), 7.0));
        assert!(close(stats.threshold(0.0), 5.0));
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(SizeStatistics::new(-1.0, 0.0).is_err());
        assert!(SizeStatistics::new(0.0, f64::NAN).is_err());
        assert!(SizeStatistics::new(f64::INFINITY, 0.0).is_err());
        assert!(validate_theta(-0.5).is_err());
        assert!(validate_theta(f64::NAN).is_err());
        assert!(validate_theta(0.0).is_ok());
    }
}
