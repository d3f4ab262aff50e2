//! Analysis result model
//!
//! Priority levels and the packaged outcome of one risk analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Priority levels for a scored patient, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    /// Score below the low bound
    Low = 1,
    /// Score between the low and medium bounds
    Medium = 2,
    /// Score between the medium and high bounds
    High = 3,
    /// Score at or above the high bound
    Critical = 4,
}

impl PriorityLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Get the numeric value for this priority level
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get a descriptive name for this priority level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Outcome of analysing one patient payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Output of the scoring model
    pub risk_score: f64,
    /// Priority band the score falls into
    pub priority_level: PriorityLevel,
    /// Rule-based explanation messages, in rule order
    pub explanation: Vec<String>,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Risk Analysis:")?;
        writeln!(f, "  Risk Score: {:.4}", self.risk_score)?;
        writeln!(f, "  Priority Level: {}", self.priority_level)?;
        if self.explanation.is_empty() {
            writeln!(f, "  Explanation: none")?;
        } else {
            writeln!(f, "  Explanation:")?;
            for message in &self.explanation {
                writeln!(f, "    - {message}")?;
            }
        }
        Ok(())
    }
}
