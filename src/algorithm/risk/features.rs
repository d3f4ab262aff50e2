//! Feature extraction
//!
//! Derives the four scalar features the scoring model consumes from a
//! decoded patient record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GuardianError, Result};
use crate::models::PatientRecord;

/// Number of features in a `FeatureVector`
pub const FEATURE_COUNT: usize = 4;

/// Feature names in positional order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "days_since_checkup",
    "chronic_condition_count",
    "mean_exam_value",
];

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// How to handle a record without exam readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyExamPolicy {
    /// Fail with `GuardianError::EmptyExamSet`
    #[default]
    Reject,
    /// Use 0.0 as the mean exam value
    TreatAsZero,
}

/// How to handle a last checkup that lies after the analysis time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FutureCheckupPolicy {
    /// Fail with `GuardianError::CheckupInFuture`
    #[default]
    Reject,
    /// Use 0.0 days since checkup
    ClampToZero,
    /// Keep the negative day count
    Allow,
}

/// Policies applied while extracting features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureOptions {
    /// Behaviour for an empty exam list
    pub empty_exams: EmptyExamPolicy,
    /// Behaviour for a checkup in the future
    pub future_checkup: FutureCheckupPolicy,
}

/// Fixed-shape numeric summary of a patient record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Age in years
    pub age: f64,
    /// Fractional days between the last checkup and the analysis time
    pub days_since_checkup: f64,
    /// Number of chronic conditions
    pub chronic_condition_count: f64,
    /// Mean of the recent exam values
    pub mean_exam_value: f64,
}

impl FeatureVector {
    /// Features in positional order
    #[must_use]
    pub const fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.days_since_checkup,
            self.chronic_condition_count,
            self.mean_exam_value,
        ]
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        let [age, days_since_checkup, chronic_condition_count, mean_exam_value] = values;
        Self {
            age,
            days_since_checkup,
            chronic_condition_count,
            mean_exam_value,
        }
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = FEATURE_NAMES
            .iter()
            .zip(self.as_array())
            .map(|(name, value)| format!("{name}={value:.3}"))
            .collect::<Vec<_>>();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Fractional days from `last_checkup` to `now`, negative if `now` is earlier
#[must_use]
pub fn days_between(last_checkup: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    now.signed_duration_since(last_checkup).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Extract the feature vector for a record at a given point in time
pub fn extract_features(
    record: &PatientRecord,
    now: DateTime<Utc>,
    options: FeatureOptions,
) -> Result<FeatureVector> {
    let mut days_since_checkup = days_between(record.last_checkup, now);
    if days_since_checkup < 0.0 {
        match options.future_checkup {
            FutureCheckupPolicy::Reject => {
                return Err(GuardianError::CheckupInFuture {
                    last_checkup: record.last_checkup,
                    now,
                });
            }
            FutureCheckupPolicy::ClampToZero => {
                log::warn!(
                    "Last checkup {} is after {now}; clamping days since checkup to zero",
                    record.last_checkup
                );
                days_since_checkup = 0.0;
            }
            FutureCheckupPolicy::Allow => {}
        }
    }

    let mean_exam_value = match (record.mean_exam_value(), options.empty_exams) {
        (Some(mean), _) => mean,
        (None, EmptyExamPolicy::Reject) => return Err(GuardianError::EmptyExamSet),
        (None, EmptyExamPolicy::TreatAsZero) => {
            log::warn!("Record has no recent exams; using 0 as mean exam value");
            0.0
        }
    };

    Ok(FeatureVector {
        age: f64::from(record.age),
        days_since_checkup,
        chronic_condition_count: record.chronic_conditions.len() as f64,
        mean_exam_value,
    })
}
