use std::path::PathBuf;

use anyhow::Context;
use chrono::{TimeZone, Utc};
use log::{info, warn};

use health_guardian::{
    AnalyzerConfig, ExamReading, HealthGuardian, OutbreakConfig, OutbreakPredictor,
    PatientRecord, outbreak_alert,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional path to a JSON analyzer configuration
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => AnalyzerConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    info!("{config}");

    let guardian = HealthGuardian::new(&config).context("Failed to build analyzer")?;

    // Sample record standing in for the data referenced by a patient NFT
    let exam_date = Utc
        .with_ymd_and_hms(2023, 5, 1, 0, 0, 0)
        .single()
        .context("invalid exam date")?;
    let record = PatientRecord::new(
        65,
        Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).single().context("invalid checkup date")?,
    )
    .with_condition("Diabetes")
    .with_condition("Hypertension")
    .with_exam(ExamReading::new("Blood Pressure", 150.0, exam_date))
    .with_exam(ExamReading::new("Blood Sugar", 180.0, exam_date));

    let payload = guardian.encode_record(&record)?;
    info!("Encoded patient payload ({} bytes)", payload.len());

    let result = guardian
        .analyze_patient_data(&payload)
        .context("Patient analysis failed")?;
    info!("AI analysis result: {}", serde_json::to_string_pretty(&result)?);

    // Outbreak simulation
    let outbreak_config = OutbreakConfig::default();
    info!("{outbreak_config}");
    let alert_threshold = outbreak_config.alert_threshold;
    let count = outbreak_config.prediction_count;

    let mut predictor = OutbreakPredictor::new(outbreak_config)?;
    let predictions = predictor.simulate_predictions(count, Utc::now().date_naive())?;
    for (i, prediction) in predictions.iter().enumerate() {
        info!("Prediction {}: {prediction}", i + 1);
    }

    if let Some(top) = outbreak_alert(&predictions, alert_threshold) {
        warn!(
            "ALERT! High risk of {} outbreak in {} (risk {:.2}, predicted for {}). Immediate action required!",
            top.disease, top.location, top.risk_level, top.prediction_date
        );
    }

    info!("Simulation completed successfully");
    Ok(())
}
