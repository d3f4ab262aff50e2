//! Simulated disease outbreak predictions
//!
//! Produces randomly drawn outbreak predictions over a configured set of
//! locations and diseases, and picks out the one that warrants an alert.

use std::fmt;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::OutbreakConfig;
use crate::error::{GuardianError, Result};

/// A single predicted outbreak
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutbreakPrediction {
    /// Where the outbreak is predicted
    pub location: String,
    /// Which disease
    pub disease: String,
    /// Risk level in `[0, 1)`
    pub risk_level: f64,
    /// Date the outbreak is predicted for
    pub prediction_date: NaiveDate,
}

impl fmt::Display for OutbreakPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} (risk {:.2}, predicted for {})",
            self.disease, self.location, self.risk_level, self.prediction_date
        )
    }
}

/// Random outbreak prediction generator
#[derive(Debug)]
pub struct OutbreakPredictor {
    config: OutbreakConfig,
    rng: StdRng,
}

impl OutbreakPredictor {
    /// Create a predictor seeded from the operating system
    pub fn new(config: OutbreakConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a predictor with a fixed seed, for reproducible runs
    pub fn with_seed(config: OutbreakConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: OutbreakConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &OutbreakConfig {
        &self.config
    }

    /// Draw one prediction dated between 1 and `max_horizon_days` days after `today`
    pub fn generate_prediction(&mut self, today: NaiveDate) -> Result<OutbreakPrediction> {
        let location = self
            .config
            .locations
            .choose(&mut self.rng)
            .ok_or_else(|| GuardianError::config("no outbreak locations configured"))?
            .clone();
        let disease = self
            .config
            .diseases
            .choose(&mut self.rng)
            .ok_or_else(|| GuardianError::config("no outbreak diseases configured"))?
            .clone();
        let risk_level: f64 = self.rng.random();
        let offset = self.rng.random_range(1..=self.config.max_horizon_days);
        let prediction_date = today
            .checked_add_signed(Duration::days(i64::from(offset)))
            .ok_or_else(|| {
                GuardianError::config(format!("prediction date overflows from {today}"))
            })?;

        Ok(OutbreakPrediction {
            location,
            disease,
            risk_level,
            prediction_date,
        })
    }

    /// Draw `count` predictions
    pub fn simulate_predictions(
        &mut self,
        count: usize,
        today: NaiveDate,
    ) -> Result<Vec<OutbreakPrediction>> {
        let predictions = (0..count)
            .map(|_| self.generate_prediction(today))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("Simulated {} outbreak predictions", predictions.len());
        Ok(predictions)
    }
}

/// Prediction with the highest risk level, the first one on ties
#[must_use]
pub fn highest_risk(predictions: &[OutbreakPrediction]) -> Option<&OutbreakPrediction> {
    predictions.iter().fold(None, |best, candidate| match best {
        Some(current) if current.risk_level >= candidate.risk_level => Some(current),
        _ => Some(candidate),
    })
}

/// Highest-risk prediction when its risk level exceeds `threshold`
#[must_use]
pub fn outbreak_alert(
    predictions: &[OutbreakPrediction],
    threshold: f64,
) -> Option<&OutbreakPrediction> {
    highest_risk(predictions).filter(|prediction| prediction.risk_level > threshold)
}
