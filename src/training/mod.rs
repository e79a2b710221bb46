//! Training program module
//!
//! Static exercise catalog and the 12-week bodyweight program generator.

mod catalog;
mod program;

pub use catalog::{exercise, Equipment, Exercise, EXERCISES};
pub use program::{
    twelve_week_program, ExercisePrescription, ProgramWeek, TrainingLevel, WorkoutDay,
};
