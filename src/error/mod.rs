//! Error handling for the health guardian pipeline.

use std::io;

use chrono::{DateTime, Utc};

/// Specialized error type for risk analysis
#[derive(Debug, thiserror::Error)]
pub enum GuardianError {
    /// Payload could not be turned into a patient record
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Patient record could not be turned into a payload
    #[error("Encode error: {0}")]
    EncodeError(String),

    /// The record carries no exam readings, so the mean exam value is undefined
    #[error("Recent exam set is empty; mean exam value is undefined")]
    EmptyExamSet,

    /// The last checkup lies after the analysis time
    #[error("Last checkup {last_checkup} is later than analysis time {now}")]
    CheckupInFuture {
        /// Timestamp found in the record
        last_checkup: DateTime<Utc>,
        /// Time the analysis ran at
        now: DateTime<Utc>,
    },

    /// Thresholds are not finite and strictly ascending
    #[error("Invalid threshold configuration: {0}")]
    InvalidThresholdConfiguration(String),

    /// Weight vector does not match the feature vector length
    #[error("Weight count mismatch: expected {expected}, got {actual}")]
    WeightCountMismatch {
        /// Number of features
        expected: usize,
        /// Number of weights supplied
        actual: usize,
    },

    /// The scoring model failed or produced an unusable score
    #[error("Model error: {0}")]
    ModelError(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error reading a configuration file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl GuardianError {
    /// Create a decode error from anything displayable
    pub fn decode(message: impl std::fmt::Display) -> Self {
        Self::DecodeError(message.to_string())
    }

    /// Create a configuration error from anything displayable
    pub fn config(message: impl std::fmt::Display) -> Self {
        Self::ConfigError(message.to_string())
    }

    /// Whether the error was caused by a malformed payload
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::DecodeError(_))
    }
}

/// Result type for health guardian operations
pub type Result<T> = std::result::Result<T, GuardianError>;
