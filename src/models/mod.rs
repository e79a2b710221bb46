//! Data models
//!
//! Rust structs shared across the calculation modules.

mod energy;
mod ingredient;
mod nutrition;
mod profile;

pub use energy::{DailyEnergyRecord, NutritionLog, WeightEntry};
pub use ingredient::{AisleCategory, Ingredient, IngredientKey, Recipe};
pub use nutrition::MacroTotals;
pub use profile::{age_on, AnthropometricProfile, HealthProfile, Sex};
