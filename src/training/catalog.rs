//! Exercise catalog
//!
//! Immutable static catalog of the bodyweight exercises the program
//! generator prescribes.

use serde::{Deserialize, Serialize};

/// Equipment an exercise needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Equipment {
    None,
    Chair,
    Floor,
}

/// A catalog exercise
///
/// Serialize-only: the catalog is static data handed out to clients, never
/// read back in.
#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub muscles: &'static [&'static str],
    pub equipment: Equipment,
    pub image_key: &'static str,
}

/// The full exercise catalog
pub static EXERCISES: &[Exercise] = &[
    Exercise {
        id: "squat",
        name: "Squat",
        description: "Keeping your back straight, lower yourself as if sitting on an invisible chair, then stand back up.",
        muscles: &["Quadriceps", "Glutes"],
        equipment: Equipment::None,
        image_key: "squat_exercise_illustration",
    },
    Exercise {
        id: "pushup",
        name: "Push-up",
        description: "From the plank position, lower your chest toward the floor by bending your arms, then push back up.",
        muscles: &["Chest", "Triceps"],
        equipment: Equipment::None,
        image_key: "pushup_exercise_illustration",
    },
    Exercise {
        id: "plank",
        name: "Plank",
        description: "Resting on your forearms and toes, hold your body straight as a board.",
        muscles: &["Core", "Abdominals"],
        equipment: Equipment::Floor,
        image_key: "plank_exercise_illustration",
    },
    Exercise {
        id: "tricep_dips",
        name: "Tricep Dips",
        description: "With your hands on the edge of a stable chair, lower your hips and push back up using your triceps.",
        muscles: &["Triceps"],
        equipment: Equipment::Chair,
        image_key: "tricep_dips_exercise_illustration",
    },
    Exercise {
        id: "lunges",
        name: "Lunges",
        description: "Step forward and lower your back knee toward the floor, keeping your torso upright.",
        muscles: &["Legs", "Glutes"],
        equipment: Equipment::None,
        image_key: "lunges_exercise_illustration",
    },
    Exercise {
        id: "glute_bridge",
        name: "Glute Bridge",
        description: "Lying on the floor, lift your hips upward by squeezing your glutes, then lower slowly.",
        muscles: &["Glutes", "Lower back"],
        equipment: Equipment::Floor,
        image_key: "glute_bridge_exercise_illustration",
    },
];

/// Look up a catalog exercise by id
pub fn exercise(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}
