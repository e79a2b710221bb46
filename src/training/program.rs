//! 12-week program generator
//!
//! Produces a fixed three-day-per-week bodyweight program whose volume
//! steps up every two weeks from a per-level baseline.

use serde::{Deserialize, Serialize};

/// Training experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl TrainingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingLevel::Beginner => "BEGINNER",
            TrainingLevel::Intermediate => "INTERMEDIATE",
            TrainingLevel::Advanced => "ADVANCED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "BEGINNER" => Some(TrainingLevel::Beginner),
            "INTERMEDIATE" => Some(TrainingLevel::Intermediate),
            "ADVANCED" => Some(TrainingLevel::Advanced),
            _ => None,
        }
    }

    /// Starting reps for rep-based exercises
    fn base_reps(&self) -> u32 {
        match self {
            TrainingLevel::Beginner => 8,
            TrainingLevel::Intermediate => 12,
            TrainingLevel::Advanced => 15,
        }
    }

    /// Starting hold duration in seconds for timed exercises
    fn base_duration_seconds(&self) -> u32 {
        match self {
            TrainingLevel::Beginner => 20,
            TrainingLevel::Intermediate => 30,
            TrainingLevel::Advanced => 45,
        }
    }
}

/// One prescribed exercise within a workout
#[derive(Debug, Clone, Serialize)]
pub struct ExercisePrescription {
    pub exercise_id: &'static str,
    pub sets: u32,
    pub reps: Option<u32>,
    pub duration_seconds: Option<u32>,
    pub rest_seconds: u32,
}

/// One workout day within a week
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutDay {
    pub day: u32,
    pub exercises: Vec<ExercisePrescription>,
}

/// One week of the program
#[derive(Debug, Clone, Serialize)]
pub struct ProgramWeek {
    pub week: u32,
    pub workouts: Vec<WorkoutDay>,
}

fn reps(exercise_id: &'static str, sets: u32, reps: u32, rest_seconds: u32) -> ExercisePrescription {
    ExercisePrescription {
        exercise_id,
        sets,
        reps: Some(reps),
        duration_seconds: None,
        rest_seconds,
    }
}

fn timed(
    exercise_id: &'static str,
    sets: u32,
    duration_seconds: u32,
    rest_seconds: u32,
) -> ExercisePrescription {
    ExercisePrescription {
        exercise_id,
        sets,
        reps: None,
        duration_seconds: Some(duration_seconds),
        rest_seconds,
    }
}

/// Generate the 12-week program for a training level
///
/// Three workouts per week on days 1, 3 and 5. Intensity increases every
/// two weeks: +2 reps and +5 seconds per increment. Push-up and dip reps
/// are floored at 5 so the reduced prescriptions never degenerate.
pub fn twelve_week_program(level: TrainingLevel) -> Vec<ProgramWeek> {
    let base_reps = level.base_reps();
    let base_duration = level.base_duration_seconds();

    (1..=12)
        .map(|week| {
            let increment = (week - 1) / 2;
            let current_reps = base_reps + increment * 2;
            let current_duration = base_duration + increment * 5;

            let workouts = vec![
                WorkoutDay {
                    day: 1,
                    exercises: vec![
                        reps("squat", 3, current_reps, 60),
                        reps("pushup", 3, current_reps.saturating_sub(4).max(5), 60),
                        timed("plank", 3, current_duration, 45),
                    ],
                },
                WorkoutDay {
                    day: 3,
                    exercises: vec![
                        reps("lunges", 3, current_reps, 60),
                        reps("tricep_dips", 3, current_reps.saturating_sub(4).max(5), 60),
                        reps("glute_bridge", 3, current_reps + 5, 45),
                    ],
                },
                WorkoutDay {
                    day: 5,
                    exercises: vec![
                        reps("squat", 2, current_reps + 2, 45),
                        reps("pushup", 2, current_reps.saturating_sub(2).max(5), 45),
                        timed("plank", 3, current_duration + 10, 30),
                        reps("glute_bridge", 2, current_reps + 10, 30),
                    ],
                },
            ];

            ProgramWeek { week, workouts }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::exercise;

    #[test]
    fn test_program_spans_twelve_weeks_of_three_days() {
        let program = twelve_week_program(TrainingLevel::Beginner);
        assert_eq!(program.len(), 12);
        for (i, week) in program.iter().enumerate() {
            assert_eq!(week.week, i as u32 + 1);
            let days: Vec<u32> = week.workouts.iter().map(|w| w.day).collect();
            assert_eq!(days, vec![1, 3, 5]);
        }
    }

    #[test]
    fn test_intensity_steps_every_two_weeks() {
        let program = twelve_week_program(TrainingLevel::Intermediate);
        let squat_reps = |week: usize| program[week].workouts[0].exercises[0].reps.unwrap();
        // Weeks 1-2 at baseline, then +2 per two-week block
        assert_eq!(squat_reps(0), 12);
        assert_eq!(squat_reps(1), 12);
        assert_eq!(squat_reps(2), 14);
        assert_eq!(squat_reps(11), 22);

        let plank = &program[0].workouts[0].exercises[2];
        assert_eq!(plank.duration_seconds, Some(30));
        assert_eq!(plank.reps, None);
    }

    #[test]
    fn test_pushup_floor_for_beginners() {
        let program = twelve_week_program(TrainingLevel::Beginner);
        // Baseline 8 reps - 4 would be 4; floored at 5
        let pushups = &program[0].workouts[0].exercises[1];
        assert_eq!(pushups.reps, Some(5));
    }

    #[test]
    fn test_day_five_is_the_lighter_variant() {
        let program = twelve_week_program(TrainingLevel::Advanced);
        let day5 = &program[0].workouts[2];
        assert_eq!(day5.exercises.len(), 4);
        assert_eq!(day5.exercises[0].sets, 2);
        assert_eq!(day5.exercises[0].reps, Some(17));
    }

    #[test]
    fn test_every_prescription_resolves_in_catalog() {
        for week in twelve_week_program(TrainingLevel::Intermediate) {
            for workout in week.workouts {
                for prescription in workout.exercises {
                    assert!(exercise(prescription.exercise_id).is_some());
                }
            }
        }
    }
}
