//! Dashboard summary composition
//!
//! Combines a stored health profile with one day's nutrition logs and
//! recent weight history into a single view. This module only folds data
//! that other modules computed; it runs no metabolic formulas itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{HealthProfile, MacroTotals, NutritionLog, WeightEntry};

/// How many weight entries the summary shows
const WEIGHT_HISTORY_LEN: usize = 7;

/// One point of the dashboard weight chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightPoint {
    pub weight_kg: f64,
    pub date: NaiveDate,
}

/// The daily summary view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Adaptive TDEE when available, formula TDEE otherwise
    pub tdee: f64,
    pub nutrition: MacroTotals,
    pub weight_history: Vec<WeightPoint>,
}

/// Build the summary for one day
///
/// `logs` are filtered to entries falling on `day` (UTC); `weight_history`
/// keeps the most recent seven entries, oldest first.
pub fn daily_summary(
    profile: &HealthProfile,
    logs: &[NutritionLog],
    weight_history: &[WeightEntry],
    day: NaiveDate,
) -> DashboardSummary {
    let tdee = profile.adaptive_tdee.unwrap_or(profile.current_tdee);

    let nutrition = logs
        .iter()
        .filter(|log| log.timestamp.date_naive() == day)
        .fold(MacroTotals::zero(), |acc, log| {
            acc.add(&MacroTotals {
                calories: log.calories,
                protein: log.protein,
                carbs: log.carbs,
                fats: log.fats,
            })
        });

    let mut recent: Vec<&WeightEntry> = weight_history.iter().collect();
    recent.sort_by_key(|entry| entry.timestamp);
    let skip = recent.len().saturating_sub(WEIGHT_HISTORY_LEN);
    let weight_history = recent[skip..]
        .iter()
        .map(|entry| WeightPoint {
            weight_kg: entry.weight_kg,
            date: entry.timestamp.date_naive(),
        })
        .collect();

    DashboardSummary {
        tdee,
        nutrition,
        weight_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn profile(current_tdee: f64, adaptive_tdee: Option<f64>) -> HealthProfile {
        HealthProfile {
            current_bmr: 1600.0,
            current_tdee,
            adaptive_tdee,
            body_fat_percentage: None,
            neck_cm: None,
            waist_cm: None,
            hip_cm: None,
            chest_cm: None,
        }
    }

    fn log(calories: f64, day_offset: i64) -> NutritionLog {
        NutritionLog {
            calories,
            protein: calories / 20.0,
            carbs: calories / 10.0,
            fats: calories / 30.0,
            timestamp: Utc.with_ymd_and_hms(2026, 5, 10, 12, 0, 0).unwrap()
                + Duration::days(day_offset),
        }
    }

    #[test]
    fn test_adaptive_tdee_preferred() {
        let summary = daily_summary(
            &profile(2400.0, Some(2650.0)),
            &[],
            &[],
            NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
        );
        assert!((summary.tdee - 2650.0).abs() < 0.001);
    }

    #[test]
    fn test_formula_tdee_fallback() {
        let summary = daily_summary(
            &profile(2400.0, None),
            &[],
            &[],
            NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
        );
        assert!((summary.tdee - 2400.0).abs() < 0.001);
    }

    #[test]
    fn test_nutrition_sums_same_day_logs_only() {
        let logs = vec![log(600.0, 0), log(450.0, 0), log(900.0, -1), log(300.0, 1)];
        let summary = daily_summary(
            &profile(2400.0, None),
            &logs,
            &[],
            NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
        );
        assert!((summary.nutrition.calories - 1050.0).abs() < 0.001);
        assert!((summary.nutrition.protein - 52.5).abs() < 0.001);
    }

    #[test]
    fn test_weight_history_keeps_last_seven_ascending() {
        let start = Utc.with_ymd_and_hms(2026, 5, 1, 7, 0, 0).unwrap();
        // Unsorted input with ten entries
        let mut entries: Vec<WeightEntry> = (0..10)
            .map(|i| WeightEntry {
                weight_kg: 80.0 - 0.2 * i as f64,
                timestamp: start + Duration::days(i),
            })
            .collect();
        entries.swap(0, 9);

        let summary = daily_summary(
            &profile(2400.0, None),
            &[],
            &entries,
            NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
        );

        assert_eq!(summary.weight_history.len(), 7);
        assert_eq!(
            summary.weight_history[0].date,
            NaiveDate::from_ymd_opt(2026, 5, 4).unwrap()
        );
        assert!((summary.weight_history[6].weight_kg - 78.2).abs() < 0.001);
    }
}
