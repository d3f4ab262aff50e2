//! Patient record model
//!
//! This module contains the `PatientRecord` decoded from an analysis payload,
//! together with the exam readings it carries.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::iso8601;

/// A single exam reading attached to a patient record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamReading {
    /// Name of the exam (e.g. "Blood Pressure")
    pub name: String,
    /// Measured value
    pub value: f64,
    /// When the reading was taken
    #[serde(rename = "date", with = "iso8601")]
    pub observed_at: DateTime<Utc>,
}

impl ExamReading {
    /// Create a new exam reading
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, observed_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            value,
            observed_at,
        }
    }
}

/// Structured health data for one individual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Age in whole years
    pub age: u32,
    /// Timestamp of the most recent checkup
    #[serde(with = "iso8601")]
    pub last_checkup: DateTime<Utc>,
    /// Chronic condition labels, in payload order
    pub chronic_conditions: Vec<String>,
    /// Recent exam readings, in payload order
    pub recent_exams: Vec<ExamReading>,
}

impl PatientRecord {
    /// Create a record with no conditions or exams
    #[must_use]
    pub const fn new(age: u32, last_checkup: DateTime<Utc>) -> Self {
        Self {
            age,
            last_checkup,
            chronic_conditions: Vec::new(),
            recent_exams: Vec::new(),
        }
    }

    /// Add a chronic condition label
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.chronic_conditions.push(condition.into());
        self
    }

    /// Add an exam reading
    #[must_use]
    pub fn with_exam(mut self, exam: ExamReading) -> Self {
        self.recent_exams.push(exam);
        self
    }

    /// Time elapsed between the last checkup and `now`
    ///
    /// Negative when the checkup lies after `now`.
    #[must_use]
    pub fn time_since_checkup(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.last_checkup)
    }

    /// Whether any chronic condition is recorded
    #[must_use]
    pub fn has_chronic_conditions(&self) -> bool {
        !self.chronic_conditions.is_empty()
    }

    /// Arithmetic mean of the exam values, `None` when there are no exams
    #[must_use]
    pub fn mean_exam_value(&self) -> Option<f64> {
        if self.recent_exams.is_empty() {
            return None;
        }

        let sum: f64 = self.recent_exams.iter().map(|exam| exam.value).sum();
        Some(sum / self.recent_exams.len() as f64)
    }
}
