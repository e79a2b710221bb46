//! Skinfold body composition
//!
//! Jackson-Pollock 7-site body density equations and the Siri conversion to
//! body-fat percentage. Skinfold sums are in millimeters.
//!
//! Sites: chest, midaxillary, tricep, subscapular, abdominal, suprailiac,
//! thigh.

/// Body density from the 7-site skinfold sum, male equation
pub fn body_density_male_7(sum7_mm: f64, age_years: f64) -> f64 {
    1.112 - 0.00043499 * sum7_mm + 0.00000055 * sum7_mm.powi(2) - 0.00028826 * age_years
}

/// Body density from the 7-site skinfold sum, female equation
pub fn body_density_female_7(sum7_mm: f64, age_years: f64) -> f64 {
    1.097 - 0.00046971 * sum7_mm + 0.00000056 * sum7_mm.powi(2) - 0.00012828 * age_years
}

/// Body-fat percentage from body density (Siri equation)
///
/// `495 / density - 450`. Composes with either density function above.
pub fn body_fat_from_density(density: f64) -> f64 {
    495.0 / density - 450.0
}
