//! Fitness calculation module
//!
//! MET-based activity energy expenditure and skinfold body composition.

mod activity;
mod skinfold;

pub use activity::{calories_burned, Activity, ACTIVITIES};
pub use skinfold::{body_density_female_7, body_density_male_7, body_fat_from_density};
