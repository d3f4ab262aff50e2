//! A Rust library for scoring patient health risk from encoded records,
//! with priority classification and rule-based explanations.

pub mod algorithm;
pub mod analyzer;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use analyzer::HealthGuardian;
pub use config::{AnalyzerConfig, OutbreakConfig};
pub use error::{GuardianError, Result};
pub use models::{AnalysisResult, ExamReading, PatientRecord, PriorityLevel};

// Pipeline seams
pub use algorithm::risk::{
    EmptyExamPolicy, ExplanationRules, FeatureOptions, FeatureVector, FutureCheckupPolicy,
    LinearRiskModel, PriorityClassifier, RiskModel, RiskThresholds, extract_features,
};
pub use codec::{HexCodec, PayloadCodec, decode_record, encode_record};

// Outbreak simulation
pub use algorithm::outbreak::{OutbreakPrediction, OutbreakPredictor, highest_risk, outbreak_alert};
