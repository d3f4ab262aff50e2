//! Configuration for the risk analyzer and the outbreak simulation.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::risk::features::{
    EmptyExamPolicy, FEATURE_COUNT, FEATURE_NAMES, FeatureOptions, FutureCheckupPolicy,
};
use crate::algorithm::risk::scorer::DEFAULT_WEIGHTS;
use crate::algorithm::risk::{ExplanationRules, RiskThresholds};
use crate::error::{GuardianError, Result};

/// Configuration for `HealthGuardian`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Linear model weights in feature order
    pub weights: [f64; FEATURE_COUNT],
    /// Priority band thresholds
    pub thresholds: RiskThresholds,
    /// Explanation rule parameters
    pub rules: ExplanationRules,
    /// Behaviour for records without exam readings
    pub empty_exam_policy: EmptyExamPolicy,
    /// Behaviour for checkups dated after the analysis time
    pub future_checkup_policy: FutureCheckupPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            thresholds: RiskThresholds::default(),
            rules: ExplanationRules::default(),
            empty_exam_policy: EmptyExamPolicy::default(),
            future_checkup_policy: FutureCheckupPolicy::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load a configuration from a JSON file
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            GuardianError::config(format!("failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        log::info!("Loaded analyzer configuration from {}", path.display());
        Ok(config)
    }

    /// Check values that the type system does not
    ///
    /// Thresholds need no check here, `RiskThresholds` is validated on construction.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in FEATURE_NAMES.iter().zip(self.weights) {
            if !weight.is_finite() {
                return Err(GuardianError::config(format!(
                    "weight for {name} must be finite, got {weight}"
                )));
            }
        }
        self.rules.validate()
    }

    /// Feature extraction policies
    #[must_use]
    pub const fn feature_options(&self) -> FeatureOptions {
        FeatureOptions {
            empty_exams: self.empty_exam_policy,
            future_checkup: self.future_checkup_policy,
        }
    }
}

impl fmt::Display for AnalyzerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analyzer Configuration:")?;
        writeln!(f, "  Weights: {:?}", self.weights)?;
        writeln!(f, "  Thresholds: {}", self.thresholds)?;
        writeln!(f, "  Age Threshold: {}", self.rules.age_threshold)?;
        writeln!(f, "  Overdue Checkup Days: {}", self.rules.overdue_checkup_days)?;
        writeln!(f, "  Empty Exam Policy: {:?}", self.empty_exam_policy)?;
        writeln!(f, "  Future Checkup Policy: {:?}", self.future_checkup_policy)?;
        Ok(())
    }
}

/// Configuration for the outbreak simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutbreakConfig {
    /// Candidate outbreak locations
    pub locations: Vec<String>,
    /// Candidate diseases
    pub diseases: Vec<String>,
    /// Predictions fall between 1 and this many days ahead
    pub max_horizon_days: u32,
    /// Number of predictions per simulation run
    pub prediction_count: usize,
    /// Risk level above which the top prediction raises an alert
    pub alert_threshold: f64,
}

impl Default for OutbreakConfig {
    fn default() -> Self {
        Self {
            locations: ["New York", "London", "Tokyo", "São Paulo", "Mumbai"]
                .map(String::from)
                .to_vec(),
            diseases: ["COVID-19", "Influenza", "Dengue", "Malaria"]
                .map(String::from)
                .to_vec(),
            max_horizon_days: 30,
            prediction_count: 5,
            alert_threshold: 0.7,
        }
    }
}

impl OutbreakConfig {
    /// Reject configurations the predictor cannot draw from
    pub fn validate(&self) -> Result<()> {
        if self.locations.is_empty() {
            return Err(GuardianError::config("outbreak locations must not be empty"));
        }
        if self.diseases.is_empty() {
            return Err(GuardianError::config("outbreak diseases must not be empty"));
        }
        if self.max_horizon_days == 0 {
            return Err(GuardianError::config("outbreak horizon must be at least one day"));
        }
        if !self.alert_threshold.is_finite() {
            return Err(GuardianError::config("outbreak alert threshold must be finite"));
        }
        Ok(())
    }
}

impl fmt::Display for OutbreakConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Outbreak Configuration:")?;
        writeln!(f, "  Locations: {}", self.locations.join(", "))?;
        writeln!(f, "  Diseases: {}", self.diseases.join(", "))?;
        writeln!(f, "  Horizon: 1-{} days", self.max_horizon_days)?;
        writeln!(f, "  Predictions per Run: {}", self.prediction_count)?;
        writeln!(f, "  Alert Threshold: {}", self.alert_threshold)?;
        Ok(())
    }
}
