//! Metabolic formulas
//!
//! Mifflin-St Jeor BMR, activity-scaled TDEE, deficit targets with a safety
//! floor, and the U.S. Navy circumference body-fat estimate. All functions
//! are pure; input plausibility is the caller's responsibility.

use crate::models::Sex;

/// Default daily deficit for weight loss (kcal)
pub const DEFAULT_DEFICIT_KCAL: f64 = 500.0;

/// Fixed lower bound on a calorie target (kcal)
pub const MINIMUM_CALORIES_KCAL: f64 = 1200.0;

/// Basal Metabolic Rate via Mifflin-St Jeor
///
/// Male: `10*kg + 6.25*cm - 5*years + 5`
/// Female: `10*kg + 6.25*cm - 5*years - 161`
///
/// No bounds checking; negative or zero inputs propagate arithmetically.
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let sex_offset = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years + sex_offset
}

/// Total Daily Energy Expenditure
///
/// `activity_factor` is the PAL scalar. The typical range 1.2 (sedentary)
/// to 1.9 (extremely active) is advisory, not enforced.
pub fn tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Suggested intake for weight loss, clamped to the 1200 kcal floor
pub fn target_calories(tdee: f64, deficit_kcal: f64) -> f64 {
    (tdee - deficit_kcal).max(MINIMUM_CALORIES_KCAL)
}

/// Body-fat percentage via the U.S. Navy circumference method
///
/// Returns `None` when a required measurement is missing or zero; hip is
/// required for females only. The result is rounded to one decimal.
///
/// Measurement plausibility is not guarded: `waist <= neck` (male) or
/// `waist + hip <= neck` (female) feeds a non-positive value to `log10` and
/// the NaN/infinity propagates to the caller.
pub fn body_fat_navy(
    sex: Sex,
    height_cm: f64,
    neck_cm: f64,
    waist_cm: f64,
    hip_cm: Option<f64>,
) -> Option<f64> {
    if height_cm <= 0.0 || neck_cm <= 0.0 || waist_cm <= 0.0 {
        tracing::debug!(
            height_cm,
            neck_cm,
            waist_cm,
            "body fat skipped: required measurement missing"
        );
        return None;
    }

    let percentage = match sex {
        Sex::Male => {
            495.0
                / (1.0324 - 0.19077 * (waist_cm - neck_cm).log10()
                    + 0.15456 * height_cm.log10())
                - 450.0
        }
        Sex::Female => {
            let hip_cm = match hip_cm {
                Some(h) if h > 0.0 => h,
                _ => {
                    tracing::debug!("body fat skipped: hip measurement required for female");
                    return None;
                }
            };
            495.0
                / (1.29579 - 0.35004 * (waist_cm + hip_cm - neck_cm).log10()
                    + 0.22100 * height_cm.log10())
                - 450.0
        }
    };

    Some((percentage * 10.0).round() / 10.0)
}
