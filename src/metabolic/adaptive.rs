//! Adaptive energy budget estimation
//!
//! Retro-derives a user's true average daily expenditure from observed
//! weight drift and logged intake, and schedules diet breaks and refeeds
//! over a sustained deficit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::DailyEnergyRecord;

/// Minimum number of daily records the estimator accepts
pub const MIN_HISTORY_DAYS: usize = 7;

/// Energy content of one kilogram of body-fat mass (kcal), standard
/// approximation
pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;

/// Estimation error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("adaptive TDEE needs at least {min} daily records, got {got}", min = MIN_HISTORY_DAYS)]
    InsufficientHistory { got: usize },
}

/// Estimate the real TDEE from weight and intake history
///
/// Principle: energy balance (kcal) = intake - true expenditure, and one kg
/// of body fat is about [`KCAL_PER_KG_BODY_FAT`] kcal. The weight drift
/// between the first and last record therefore reveals the average daily
/// surplus or deficit over the window, and subtracting it from average
/// intake yields the expenditure the static formula can only approximate.
///
/// Records are sorted by timestamp before use; fewer than
/// [`MIN_HISTORY_DAYS`] records is an error and the caller should fall back
/// to the formula-based TDEE. Only the first and last weights enter the
/// drift, so a single day of water-weight noise at either end moves the
/// estimate; three weeks of data is the recommended window.
pub fn retro_engineer_tdee(records: &[DailyEnergyRecord]) -> Result<f64, EstimateError> {
    if records.len() < MIN_HISTORY_DAYS {
        return Err(EstimateError::InsufficientHistory { got: records.len() });
    }

    let mut sorted: Vec<&DailyEnergyRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.timestamp);

    let start_weight = sorted[0].weight_kg;
    let end_weight = sorted[sorted.len() - 1].weight_kg;
    let weight_change = end_weight - start_weight;

    let n = sorted.len() as f64;
    let avg_calories_in = sorted.iter().map(|r| r.calories_in).sum::<f64>() / n;

    let estimated_daily_energy_balance = weight_change * KCAL_PER_KG_BODY_FAT / n;
    let real_tdee = avg_calories_in - estimated_daily_energy_balance;

    tracing::debug!(
        days = sorted.len(),
        weight_change,
        avg_calories_in,
        real_tdee,
        "adaptive TDEE estimated"
    );

    Ok(real_tdee)
}

/// Weekly metabolic strategy during a sustained deficit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetabolicStrategy {
    /// Keep the planned deficit
    Standard,
    /// Full week at maintenance, scheduled every 9th week
    DietBreak,
    /// Short intake raise, scheduled every other week
    Refeed,
}

impl MetabolicStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetabolicStrategy::Standard => "standard",
            MetabolicStrategy::DietBreak => "diet-break",
            MetabolicStrategy::Refeed => "refeed",
        }
    }

    /// Strategy for the given week of dieting
    ///
    /// Diet-break is checked before refeed, so weeks divisible by both 9
    /// and 2 (18, 36, ...) resolve to a diet break. Week 0 is standard.
    pub fn for_week(weeks_on_diet: u32) -> Self {
        if weeks_on_diet % 9 == 0 && weeks_on_diet != 0 {
            return MetabolicStrategy::DietBreak;
        }

        if weeks_on_diet % 2 == 0 && weeks_on_diet != 0 {
            return MetabolicStrategy::Refeed;
        }

        MetabolicStrategy::Standard
    }
}
