//! Shared macro-nutrient totals
//!
//! Accumulator used by the dashboard when folding a day's nutrition logs.

use serde::{Deserialize, Serialize};

/// Calories plus macro grams
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fats: f64,    // grams
}

impl MacroTotals {
    /// All zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another total to this one
    pub fn add(&self, other: &MacroTotals) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
        }
    }
}

impl std::ops::Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, other: MacroTotals) -> MacroTotals {
        MacroTotals::add(&self, &other)
    }
}
