//! Activity energy expenditure
//!
//! MET-based calorie estimation for the activities the app tracks.

use serde::{Deserialize, Serialize};

/// Tracked activity with its fixed MET coefficient
///
/// The MET values are advisory constants from the compendium, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    WalkingBrisk,
    BodyweightExerciseLight,
    BodyweightExerciseModerate,
    BodyweightExerciseVigorous,
}

/// All tracked activities
pub const ACTIVITIES: &[Activity] = &[
    Activity::WalkingBrisk,
    Activity::BodyweightExerciseLight,
    Activity::BodyweightExerciseModerate,
    Activity::BodyweightExerciseVigorous,
];

impl Activity {
    /// Metabolic Equivalent of Task for this activity
    pub fn met(&self) -> f64 {
        match self {
            Activity::WalkingBrisk => 3.5,
            Activity::BodyweightExerciseLight => 4.0,
            Activity::BodyweightExerciseModerate => 6.0,
            Activity::BodyweightExerciseVigorous => 8.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::WalkingBrisk => "walking_brisk",
            Activity::BodyweightExerciseLight => "bodyweight_exercise_light",
            Activity::BodyweightExerciseModerate => "bodyweight_exercise_moderate",
            Activity::BodyweightExerciseVigorous => "bodyweight_exercise_vigorous",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "walking_brisk" => Some(Activity::WalkingBrisk),
            "bodyweight_exercise_light" => Some(Activity::BodyweightExerciseLight),
            "bodyweight_exercise_moderate" => Some(Activity::BodyweightExerciseModerate),
            "bodyweight_exercise_vigorous" => Some(Activity::BodyweightExerciseVigorous),
            _ => None,
        }
    }
}

/// Calories burned during an activity
///
/// `met * weight_kg * duration_hours`, duration given in minutes.
pub fn calories_burned(met: f64, weight_kg: f64, duration_minutes: f64) -> f64 {
    met * weight_kg * (duration_minutes / 60.0)
}
