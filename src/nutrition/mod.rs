//! Nutrition planning module
//!
//! Intake estimation adjustments and shopping-list aggregation.

mod shopping;

pub use shopping::{aggregate_ingredients, categorize_by_aisle, filter_with_pantry, Pantry, ShoppingList};

/// Upward adjustment applied to dining-out calorie estimates
pub const RESTAURANT_BUFFER: f64 = 1.2;

/// Inflate an estimated restaurant meal by 20%
///
/// Self-reported estimates for meals out run low; the fixed buffer absorbs
/// the typical error.
pub fn apply_restaurant_buffer(estimated_calories: f64) -> f64 {
    estimated_calories * RESTAURANT_BUFFER
}
