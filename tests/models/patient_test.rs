#[cfg(test)]
mod tests {
    use crate::utils::{hex_payload, sample_record, utc_date};
    use health_guardian::{GuardianError, HexCodec, PatientRecord, decode_record, encode_record};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_round_trip_through_hex() {
        let record = sample_record();

        let payload = encode_record(&HexCodec, &record).unwrap();
        assert!(payload.starts_with(b"0x"));

        let decoded = decode_record(&HexCodec, &payload).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_round_trip_keeps_subsecond_timestamps() {
        let checkup = utc_date(2022, 1, 1) + chrono::Duration::nanoseconds(123_456_789);
        let record = PatientRecord::new(30, checkup).with_condition("Asthma");

        let payload = encode_record(&HexCodec, &record).unwrap();
        assert_eq!(decode_record(&HexCodec, &payload).unwrap(), record);
    }

    #[test]
    fn test_decode_javascript_style_payload() {
        // Shape produced by JSON.stringify on the oracle side
        let payload = hex_payload(
            r#"{"age":65,"lastCheckup":"2022-01-01T00:00:00.000Z","chronicConditions":["Diabetes","Hypertension"],"recentExams":[{"name":"Blood Pressure","value":150,"date":"2023-05-01T00:00:00.000Z"},{"name":"Blood Sugar","value":180,"date":"2023-05-01T00:00:00.000Z"}]}"#,
        );

        let record = decode_record(&HexCodec, &payload).unwrap();
        assert_eq!(record, sample_record());
    }

    #[test]
    fn test_decode_date_only_payload() {
        let payload = hex_payload(
            r#"{"age":65,"lastCheckup":"2022-01-01","chronicConditions":["Diabetes","Hypertension"],"recentExams":[{"name":"Blood Pressure","value":150,"date":"2023-05-01"},{"name":"Blood Sugar","value":180,"date":"2023-05-01"}]}"#,
        );

        let record = decode_record(&HexCodec, &payload).unwrap();
        assert_eq!(record, sample_record());
    }

    #[test]
    fn test_decode_errors_are_all_or_nothing() {
        let cases = [
            b"0xnothex".to_vec(),
            hex_payload("not json"),
            hex_payload(r#"{"age":65,"chronicConditions":[],"recentExams":[]}"#),
            hex_payload(
                r#"{"age":"old","lastCheckup":"2022-01-01","chronicConditions":[],"recentExams":[]}"#,
            ),
            hex_payload(
                r#"{"age":65,"lastCheckup":"2022-01-01","chronicConditions":"none","recentExams":[]}"#,
            ),
        ];

        for payload in cases {
            let err = decode_record(&HexCodec, &payload).unwrap_err();
            assert!(
                matches!(err, GuardianError::DecodeError(_)),
                "unexpected error: {err}"
            );
        }
    }
}
