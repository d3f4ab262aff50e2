#[cfg(test)]
mod tests {
    use crate::utils::{analysis_time, hex_payload, sample_record, utc_date};
    use chrono::Duration;
    use health_guardian::algorithm::risk::explain::{
        AGE_FACTOR_MESSAGE, CHRONIC_CONDITION_MESSAGE, OVERDUE_CHECKUP_MESSAGE,
    };
    use health_guardian::{
        AnalyzerConfig, EmptyExamPolicy, FeatureVector, GuardianError, HealthGuardian, PayloadCodec,
        PatientRecord, PriorityLevel, Result, RiskModel, RiskThresholds,
    };
    use pretty_assertions::assert_eq;

    fn guardian() -> HealthGuardian {
        HealthGuardian::new(&AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_reference_patient_is_critical() {
        let guardian = guardian();
        let payload = guardian.encode_record(&sample_record()).unwrap();

        let result = guardian.analyze_at(&payload, analysis_time()).unwrap();

        let days = (analysis_time() - utc_date(2022, 1, 1)).num_days() as f64;
        let expected = 65.0 * 0.01 + days * 0.005 + 2.0 * 0.1 + 165.0 * 0.02;
        assert!((result.risk_score - expected).abs() < 1e-9);
        assert_eq!(result.priority_level, PriorityLevel::Critical);
        assert_eq!(
            result.explanation,
            vec![
                AGE_FACTOR_MESSAGE,
                CHRONIC_CONDITION_MESSAGE,
                OVERDUE_CHECKUP_MESSAGE
            ]
        );
    }

    #[test]
    fn test_analyze_with_current_time() {
        let guardian = guardian();
        let payload = guardian.encode_record(&sample_record()).unwrap();

        let result = guardian.analyze_patient_data(&payload).unwrap();
        assert_eq!(result.priority_level, PriorityLevel::Critical);
        assert_eq!(result.explanation.len(), 3);
    }

    #[test]
    fn test_overdue_message_appears_after_a_year() {
        let guardian = guardian();
        let payload = guardian.encode_record(&sample_record()).unwrap();

        let within_year = guardian.analyze_at(&payload, utc_date(2022, 6, 1)).unwrap();
        assert_eq!(
            within_year.explanation,
            vec![AGE_FACTOR_MESSAGE, CHRONIC_CONDITION_MESSAGE]
        );

        let after_year = guardian
            .analyze_at(&payload, utc_date(2023, 1, 1) + Duration::seconds(1))
            .unwrap();
        assert_eq!(after_year.explanation.last().unwrap(), OVERDUE_CHECKUP_MESSAGE);
    }

    #[test]
    fn test_low_risk_patient_has_no_explanation() {
        let config = AnalyzerConfig {
            thresholds: RiskThresholds::new(2.0, 3.0, 4.0).unwrap(),
            ..AnalyzerConfig::default()
        };
        let guardian = HealthGuardian::new(&config).unwrap();
        let record = PatientRecord::new(20, utc_date(2024, 3, 1)).with_exam(
            health_guardian::ExamReading::new("Heart Rate", 60.0, utc_date(2024, 3, 1)),
        );
        let payload = guardian.encode_record(&record).unwrap();

        let result = guardian.analyze_at(&payload, analysis_time()).unwrap();
        // 0.2 + 14 * 0.005 + 0 + 1.2
        assert!((result.risk_score - 1.47).abs() < 1e-9);
        assert_eq!(result.priority_level, PriorityLevel::Low);
        assert!(result.explanation.is_empty());
    }

    #[test]
    fn test_decode_failure_aborts_pipeline() {
        let err = guardian()
            .analyze_at(b"0x7b", analysis_time())
            .unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_empty_exam_policies() {
        let payload = hex_payload(
            r#"{"age":70,"lastCheckup":"2024-01-01","chronicConditions":[],"recentExams":[]}"#,
        );

        let err = guardian().analyze_at(&payload, analysis_time()).unwrap_err();
        assert!(matches!(err, GuardianError::EmptyExamSet));

        let config = AnalyzerConfig {
            empty_exam_policy: EmptyExamPolicy::TreatAsZero,
            ..AnalyzerConfig::default()
        };
        let result = HealthGuardian::new(&config)
            .unwrap()
            .analyze_at(&payload, analysis_time())
            .unwrap();
        assert!(result.risk_score.is_finite());
        assert_eq!(result.explanation, vec![AGE_FACTOR_MESSAGE]);
    }

    #[test]
    fn test_oversized_overdue_window_is_rejected_before_analysis() {
        let config: AnalyzerConfig = serde_json::from_str(
            r#"{"rules":{"age_threshold":60,"overdue_checkup_days":9223372036854775807}}"#,
        )
        .unwrap();

        let err = HealthGuardian::new(&config).unwrap_err();
        assert!(matches!(err, GuardianError::ConfigError(_)));
    }

    #[test]
    fn test_future_checkup_is_rejected_by_default() {
        let guardian = guardian();
        let payload = guardian.encode_record(&sample_record()).unwrap();

        let err = guardian.analyze_at(&payload, utc_date(2021, 6, 1)).unwrap_err();
        assert!(matches!(err, GuardianError::CheckupInFuture { .. }));
    }

    /// Codec that reverses bytes, standing in for a real decryption service
    struct ReversingCodec;

    impl PayloadCodec for ReversingCodec {
        fn name(&self) -> &str {
            "reverse"
        }

        fn encode(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
            Ok(plaintext.iter().rev().copied().collect())
        }

        fn decode(&self, payload: &[u8]) -> Result<Vec<u8>> {
            Ok(payload.iter().rev().copied().collect())
        }
    }

    /// Model returning a fixed score
    struct ConstantModel(f64);

    impl RiskModel for ConstantModel {
        fn name(&self) -> &str {
            "constant"
        }

        fn score(&self, _features: &FeatureVector) -> Result<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_pluggable_codec_and_model() {
        let guardian = guardian()
            .with_codec(ReversingCodec)
            .with_model(ConstantModel(0.3));
        let payload = guardian.encode_record(&sample_record()).unwrap();
        assert!(!payload.starts_with(b"0x"));

        let result = guardian.analyze_at(&payload, analysis_time()).unwrap();
        assert_eq!(result.risk_score, 0.3);
        assert_eq!(result.priority_level, PriorityLevel::Medium);
    }

    #[test]
    fn test_non_finite_model_score_is_rejected() {
        let guardian = guardian().with_model(ConstantModel(f64::NAN));
        let payload = guardian.encode_record(&sample_record()).unwrap();

        let err = guardian.analyze_at(&payload, analysis_time()).unwrap_err();
        assert!(matches!(err, GuardianError::ModelError(_)));
    }

    #[test]
    fn test_result_json_shape() {
        let guardian = guardian();
        let payload = guardian.encode_record(&sample_record()).unwrap();
        let result = guardian.analyze_at(&payload, analysis_time()).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["priorityLevel"], "Critical");
        assert_eq!(json["explanation"].as_array().unwrap().len(), 3);
    }
}
