//! Rule-based explanations
//!
//! Three independent rules are checked against the record; each one that
//! holds contributes a fixed message. Messages always come out in rule order.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GuardianError, Result};
use crate::models::PatientRecord;

/// Message for patients older than the age threshold
pub const AGE_FACTOR_MESSAGE: &str = "Age is a contributing factor to risk.";
/// Message for patients with at least one chronic condition
pub const CHRONIC_CONDITION_MESSAGE: &str = "Presence of chronic conditions increases risk.";
/// Message for patients whose last checkup is overdue
pub const OVERDUE_CHECKUP_MESSAGE: &str = "It's been over a year since the last checkup.";

/// Largest overdue window representable as a millisecond duration
pub const MAX_OVERDUE_CHECKUP_DAYS: i64 = i64::MAX / 86_400_000;

/// Parameters of the explanation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationRules {
    /// Ages strictly above this count as a risk factor
    pub age_threshold: u32,
    /// A checkup older than this many days is overdue
    pub overdue_checkup_days: i64,
}

impl Default for ExplanationRules {
    fn default() -> Self {
        Self {
            age_threshold: 60,
            overdue_checkup_days: 365,
        }
    }
}

impl ExplanationRules {
    /// Reject an overdue window that is negative or too large to represent
    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_OVERDUE_CHECKUP_DAYS).contains(&self.overdue_checkup_days) {
            return Err(GuardianError::config(format!(
                "overdue_checkup_days must be between 0 and {MAX_OVERDUE_CHECKUP_DAYS}, got {}",
                self.overdue_checkup_days
            )));
        }
        Ok(())
    }

    /// Whether the record's age triggers the age rule
    #[must_use]
    pub const fn age_rule(&self, record: &PatientRecord) -> bool {
        record.age > self.age_threshold
    }

    /// Whether the last checkup is overdue at `now`
    ///
    /// A window too large for `Duration` is never exceeded.
    #[must_use]
    pub fn overdue_rule(&self, record: &PatientRecord, now: DateTime<Utc>) -> bool {
        Duration::try_days(self.overdue_checkup_days)
            .is_some_and(|window| record.time_since_checkup(now) > window)
    }

    /// Produce the explanation messages for a record at a point in time
    #[must_use]
    pub fn explain(&self, record: &PatientRecord, now: DateTime<Utc>) -> Vec<String> {
        let mut messages = Vec::new();

        if self.age_rule(record) {
            messages.push(AGE_FACTOR_MESSAGE.to_string());
        }
        if record.has_chronic_conditions() {
            messages.push(CHRONIC_CONDITION_MESSAGE.to_string());
        }
        if self.overdue_rule(record, now) {
            messages.push(OVERDUE_CHECKUP_MESSAGE.to_string());
        }

        messages
    }
}

/// Explain a record with the default rules
#[must_use]
pub fn explain(record: &PatientRecord, now: DateTime<Utc>) -> Vec<String> {
    ExplanationRules::default().explain(record, now)
}
