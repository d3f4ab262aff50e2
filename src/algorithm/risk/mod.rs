//! Patient risk scoring
//!
//! Feature extraction, the scoring model, priority classification and the
//! rule-based explainer that together turn a patient record into an
//! analysis result.

pub mod classifier;
pub mod explain;
pub mod features;
pub mod scorer;

pub use classifier::{PriorityClassifier, RiskThresholds};
pub use explain::ExplanationRules;
pub use features::{
    EmptyExamPolicy, FEATURE_COUNT, FeatureOptions, FeatureVector, FutureCheckupPolicy,
    extract_features,
};
pub use scorer::{LinearRiskModel, RiskModel};
