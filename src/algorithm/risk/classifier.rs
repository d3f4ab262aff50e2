//! Priority classification
//!
//! Maps a risk score onto one of the ordered priority bands. The three
//! bounds split the real line into four contiguous bands, so every score
//! lands in exactly one of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GuardianError, Result};
use crate::models::PriorityLevel;

/// Bounds as they appear in configuration files, before validation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdBounds {
    /// Upper bound of the Low band
    pub low: f64,
    /// Upper bound of the Medium band
    pub medium: f64,
    /// Upper bound of the High band
    pub high: f64,
}

/// Ascending bounds separating the priority bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThresholdBounds", into = "ThresholdBounds")]
pub struct RiskThresholds {
    low: f64,
    medium: f64,
    high: f64,
}

impl RiskThresholds {
    /// Create thresholds, rejecting bounds that are not finite and strictly ascending
    pub fn new(low: f64, medium: f64, high: f64) -> Result<Self> {
        if !(low.is_finite() && medium.is_finite() && high.is_finite()) {
            return Err(GuardianError::InvalidThresholdConfiguration(format!(
                "bounds must be finite (low={low}, medium={medium}, high={high})"
            )));
        }
        if !(low < medium && medium < high) {
            return Err(GuardianError::InvalidThresholdConfiguration(format!(
                "bounds must be strictly ascending (low={low}, medium={medium}, high={high})"
            )));
        }
        Ok(Self { low, medium, high })
    }

    /// Upper bound of the Low band
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound of the Medium band
    #[must_use]
    pub const fn medium(&self) -> f64 {
        self.medium
    }

    /// Upper bound of the High band
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 0.25,
            medium: 0.5,
            high: 0.75,
        }
    }
}

impl TryFrom<ThresholdBounds> for RiskThresholds {
    type Error = GuardianError;

    fn try_from(bounds: ThresholdBounds) -> Result<Self> {
        Self::new(bounds.low, bounds.medium, bounds.high)
    }
}

impl From<RiskThresholds> for ThresholdBounds {
    fn from(thresholds: RiskThresholds) -> Self {
        Self {
            low: thresholds.low,
            medium: thresholds.medium,
            high: thresholds.high,
        }
    }
}

impl fmt::Display for RiskThresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "low<{} medium<{} high<{}", self.low, self.medium, self.high)
    }
}

/// Classifies risk scores with a fixed set of thresholds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriorityClassifier {
    thresholds: RiskThresholds,
}

impl PriorityClassifier {
    /// Create a classifier over validated thresholds
    #[must_use]
    pub const fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Determine the priority level for a score
    #[must_use]
    pub fn classify(&self, score: f64) -> PriorityLevel {
        if score < self.thresholds.low {
            PriorityLevel::Low
        } else if score < self.thresholds.medium {
            PriorityLevel::Medium
        } else if score < self.thresholds.high {
            PriorityLevel::High
        } else {
            PriorityLevel::Critical
        }
    }
}
