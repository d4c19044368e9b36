//! Coach configuration
//!
//! Every threshold the validators compare against lives here, so callers can
//! tighten or relax the rubric without touching rule code. Defaults match the
//! behavior the product ships with.

use serde::{Deserialize, Serialize};

/// Default confidence cutoff below which a subject is reported invalid
pub const DEFAULT_VALIDITY_THRESHOLD: u8 = 70;

/// Default SMART score cutoff for key results
pub const DEFAULT_SMART_SCORE_THRESHOLD: u8 = 60;

/// Default ceiling above which a target value is flagged as unrealistic
pub const DEFAULT_UNREALISTIC_TARGET: f64 = 10_000_000.0;

/// Coach configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Confidence cutoff for `is_valid` (0-100)
    pub validity_threshold: u8,
    /// SMART score cutoff for key-result validity (0-100)
    pub smart_score_threshold: u8,
    /// Minimum text lengths
    pub lengths: LengthThresholds,
    /// Target values above this ceiling draw an ambition warning
    pub unrealistic_target: f64,
    /// Progress tier boundaries
    pub progress: ProgressTiers,
}

impl CoachConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With validity threshold
    #[inline]
    #[must_use]
    pub fn with_validity_threshold(mut self, threshold: u8) -> Self {
        self.validity_threshold = threshold;
        self
    }

    /// With SMART score threshold
    #[inline]
    #[must_use]
    pub fn with_smart_score_threshold(mut self, threshold: u8) -> Self {
        self.smart_score_threshold = threshold;
        self
    }

    /// With length thresholds
    #[inline]
    #[must_use]
    pub fn with_lengths(mut self, lengths: LengthThresholds) -> Self {
        self.lengths = lengths;
        self
    }

    /// With unrealistic target ceiling
    #[inline]
    #[must_use]
    pub fn with_unrealistic_target(mut self, ceiling: f64) -> Self {
        self.unrealistic_target = ceiling;
        self
    }

    /// With progress tiers
    #[inline]
    #[must_use]
    pub fn with_progress_tiers(mut self, tiers: ProgressTiers) -> Self {
        self.progress = tiers;
        self
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            validity_threshold: DEFAULT_VALIDITY_THRESHOLD,
            smart_score_threshold: DEFAULT_SMART_SCORE_THRESHOLD,
            lengths: LengthThresholds::default(),
            unrealistic_target: DEFAULT_UNREALISTIC_TARGET,
            progress: ProgressTiers::default(),
        }
    }
}

/// Minimum lengths a title and description must reach, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthThresholds {
    /// Minimum title length
    pub min_title: usize,
    /// Minimum description length
    pub min_description: usize,
}

impl Default for LengthThresholds {
    fn default() -> Self {
        Self {
            min_title: 10,
            min_description: 20,
        }
    }
}

/// Progress tier boundaries, as percentages
///
/// `high` must exceed `low`; progress at or above `high` is celebrated,
/// at or above `low` it is encouraged, below `low` it draws a nudge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressTiers {
    /// Lower bound of the top tier
    pub high: f64,
    /// Lower bound of the middle tier
    pub low: f64,
}

impl Default for ProgressTiers {
    fn default() -> Self {
        Self {
            high: 80.0,
            low: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let config = CoachConfig::default();
        assert_eq!(config.validity_threshold, 70);
        assert_eq!(config.smart_score_threshold, 60);
        assert_eq!(config.lengths.min_title, 10);
        assert_eq!(config.lengths.min_description, 20);
        assert_eq!(config.progress.high, 80.0);
        assert_eq!(config.progress.low, 40.0);
    }

    #[test]
    fn builder_overrides() {
        let config = CoachConfig::new()
            .with_validity_threshold(90)
            .with_lengths(LengthThresholds {
                min_title: 5,
                min_description: 10,
            })
            .with_unrealistic_target(1_000.0);

        assert_eq!(config.validity_threshold, 90);
        assert_eq!(config.lengths.min_title, 5);
        assert_eq!(config.unrealistic_target, 1_000.0);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = CoachConfig::new().with_smart_score_threshold(80);
        let json = serde_json::to_string(&config).unwrap();
        let back: CoachConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
