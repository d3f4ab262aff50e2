//! Risk analysis pipeline
//!
//! `HealthGuardian` runs decode, feature extraction, scoring, classification
//! and explanation in sequence for one payload. The first failing step ends
//! the invocation and its error is returned to the caller. Nothing is kept
//! between invocations, so a single instance can serve concurrent callers.

use chrono::{DateTime, Utc};

use crate::algorithm::risk::{
    ExplanationRules, FeatureOptions, LinearRiskModel, PriorityClassifier, RiskModel,
    extract_features,
};
use crate::codec::{self, HexCodec, PayloadCodec};
use crate::config::AnalyzerConfig;
use crate::error::{GuardianError, Result};
use crate::models::{AnalysisResult, PatientRecord};

/// Off-chain patient risk analyzer
pub struct HealthGuardian {
    codec: Box<dyn PayloadCodec>,
    model: Box<dyn RiskModel>,
    classifier: PriorityClassifier,
    rules: ExplanationRules,
    feature_options: FeatureOptions,
}

impl HealthGuardian {
    /// Create an analyzer with the hex codec and a linear model built from `config`
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        log::debug!("Creating analyzer with configuration:\n{config}");

        Ok(Self {
            codec: Box::new(HexCodec),
            model: Box::new(LinearRiskModel::new(config.weights)),
            classifier: PriorityClassifier::new(config.thresholds),
            rules: config.rules,
            feature_options: config.feature_options(),
        })
    }

    /// Replace the payload codec
    #[must_use]
    pub fn with_codec(mut self, codec: impl PayloadCodec + 'static) -> Self {
        self.codec = Box::new(codec);
        self
    }

    /// Replace the scoring model
    #[must_use]
    pub fn with_model(mut self, model: impl RiskModel + 'static) -> Self {
        self.model = Box::new(model);
        self
    }

    /// Classifier in use
    #[must_use]
    pub const fn classifier(&self) -> &PriorityClassifier {
        &self.classifier
    }

    /// Analyze a payload as of the current time
    pub fn analyze_patient_data(&self, payload: &[u8]) -> Result<AnalysisResult> {
        self.analyze_at(payload, Utc::now())
    }

    /// Analyze a payload as of `now`
    pub fn analyze_at(&self, payload: &[u8], now: DateTime<Utc>) -> Result<AnalysisResult> {
        let record = codec::decode_record(&*self.codec, payload)?;
        self.analyze_record(&record, now)
    }

    /// Analyze an already decoded record as of `now`
    pub fn analyze_record(
        &self,
        record: &PatientRecord,
        now: DateTime<Utc>,
    ) -> Result<AnalysisResult> {
        let features = extract_features(record, now, self.feature_options)?;
        log::debug!("Extracted features {features}");

        let risk_score = self.model.score(&features)?;
        if !risk_score.is_finite() {
            return Err(GuardianError::ModelError(format!(
                "model '{}' produced a non-finite score ({risk_score})",
                self.model.name()
            )));
        }

        let priority_level = self.classifier.classify(risk_score);
        let explanation = self.rules.explain(record, now);

        log::info!(
            "Scored patient with {}: risk {risk_score:.4}, priority {priority_level}, {} explanation(s)",
            self.model.name(),
            explanation.len()
        );

        Ok(AnalysisResult {
            risk_score,
            priority_level,
            explanation,
        })
    }

    /// Encode a record with this analyzer's codec
    pub fn encode_record(&self, record: &PatientRecord) -> Result<Vec<u8>> {
        codec::encode_record(&*self.codec, record)
    }
}

impl std::fmt::Debug for HealthGuardian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthGuardian")
            .field("codec", &self.codec.name())
            .field("model", &self.model.name())
            .field("classifier", &self.classifier)
            .field("rules", &self.rules)
            .field("feature_options", &self.feature_options)
            .finish()
    }
}
