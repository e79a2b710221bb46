//! User profile models
//!
//! Anthropometric inputs supplied by the caller and the derived health
//! profile the dashboard reads back.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::metabolic::{bmr, body_fat_navy, tdee};

/// Biological sex category used by the metabolic formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Anthropometric measurements for one calculation call
///
/// Immutable input owned by the caller. Weight in kg, height and
/// circumferences in cm, age in years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropometricProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub sex: Sex,
    pub neck_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub chest_cm: Option<f64>,
}

/// Stored metabolic outputs for a user
///
/// Computed once from an [`AnthropometricProfile`] when the profile is
/// created or updated; the dashboard consumes these values without
/// recomputing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfile {
    pub current_bmr: f64,
    pub current_tdee: f64,
    /// Estimate from the adaptive budget estimator, once enough history exists
    pub adaptive_tdee: Option<f64>,
    /// U.S. Navy estimate; absent when circumferences are missing
    pub body_fat_percentage: Option<f64>,
    pub neck_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub chest_cm: Option<f64>,
}

impl HealthProfile {
    /// Derive the stored metabolic values from raw measurements
    ///
    /// `activity_factor` is the usual PAL scalar (sedentary 1.2 through
    /// extremely active 1.9, advisory only). The adaptive TDEE starts out
    /// equal to the formula TDEE until history-based estimation replaces it.
    pub fn derive(profile: &AnthropometricProfile, activity_factor: f64) -> Self {
        let current_bmr = bmr(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
        );
        let current_tdee = tdee(current_bmr, activity_factor);
        let body_fat_percentage = body_fat_navy(
            profile.sex,
            profile.height_cm,
            profile.neck_cm.unwrap_or(0.0),
            profile.waist_cm.unwrap_or(0.0),
            profile.hip_cm,
        );

        Self {
            current_bmr,
            current_tdee,
            adaptive_tdee: Some(current_tdee),
            body_fat_percentage,
            neck_cm: profile.neck_cm,
            waist_cm: profile.waist_cm,
            hip_cm: profile.hip_cm,
            chest_cm: profile.chest_cm,
        }
    }
}

/// Completed years between `birth_date` and `today`
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}
