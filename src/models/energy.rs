//! Daily energy and weight records
//!
//! Time-series inputs for the adaptive budget estimator and the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One day's observed weight and caloric intake
///
/// A sequence of these is the sole input to adaptive TDEE estimation.
/// Storage order is irrelevant; the estimator sorts by timestamp. Days need
/// not be contiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEnergyRecord {
    pub weight_kg: f64,
    pub calories_in: f64,
    pub timestamp: DateTime<Utc>,
}

/// One logged food entry (dashboard input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLog {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub timestamp: DateTime<Utc>,
}

/// One body-weight measurement (dashboard weight history)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    pub weight_kg: f64,
    pub timestamp: DateTime<Utc>,
}
