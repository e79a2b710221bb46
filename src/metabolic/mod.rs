//! Metabolic calculation module
//!
//! Closed-form energy formulas and the history-based adaptive estimator.

mod adaptive;
mod formulas;

pub use adaptive::{
    retro_engineer_tdee, EstimateError, MetabolicStrategy, KCAL_PER_KG_BODY_FAT,
    MIN_HISTORY_DAYS,
};
pub use formulas::{
    bmr, body_fat_navy, target_calories, tdee, DEFAULT_DEFICIT_KCAL, MINIMUM_CALORIES_KCAL,
};
