//! Risk scoring models
//!
//! The scoring step is a trait so a served model can replace the bundled
//! linear approximation without touching the rest of the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{GuardianError, Result};

use super::features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};

/// Default weights for the linear model, in feature order
pub const DEFAULT_WEIGHTS: [f64; FEATURE_COUNT] = [0.01, 0.005, 0.1, 0.02];

/// Minimal trait for risk prediction models
pub trait RiskModel: Send + Sync {
    /// Model name used in log output
    fn name(&self) -> &str;

    /// Compute a risk score for a feature vector
    fn score(&self, features: &FeatureVector) -> Result<f64>;
}

/// Contribution of a single feature to a linear score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureContribution {
    /// Feature name
    pub feature: &'static str,
    /// Weight applied to the feature
    pub weight: f64,
    /// `weight * value`
    pub contribution: f64,
}

/// A risk model that sums weighted features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRiskModel {
    /// Weights in feature order
    pub weights: [f64; FEATURE_COUNT],
    /// Model name
    pub model_name: String,
}

impl Default for LinearRiskModel {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS)
    }
}

impl LinearRiskModel {
    /// Create a linear model with the given weights
    #[must_use]
    pub fn new(weights: [f64; FEATURE_COUNT]) -> Self {
        Self {
            weights,
            model_name: "linear-risk".to_string(),
        }
    }

    /// Create a linear model from a weight slice of exactly `FEATURE_COUNT` entries
    pub fn from_slice(weights: &[f64]) -> Result<Self> {
        let weights: [f64; FEATURE_COUNT] =
            weights
                .try_into()
                .map_err(|_| GuardianError::WeightCountMismatch {
                    expected: FEATURE_COUNT,
                    actual: weights.len(),
                })?;
        Ok(Self::new(weights))
    }

    /// Set the model name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    /// Per-feature contributions to the score, in feature order
    #[must_use]
    pub fn contributions(&self, features: &FeatureVector) -> Vec<FeatureContribution> {
        FEATURE_NAMES
            .iter()
            .zip(self.weights.iter().zip(features.as_array()))
            .map(|(&feature, (weight, value))| FeatureContribution {
                feature,
                weight: *weight,
                contribution: weight * value,
            })
            .collect()
    }
}

impl RiskModel for LinearRiskModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn score(&self, features: &FeatureVector) -> Result<f64> {
        let score = self
            .weights
            .iter()
            .zip(features.as_array())
            .map(|(w, x)| w * x)
            .sum::<f64>();
        Ok(score)
    }
}
