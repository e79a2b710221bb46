//! Ingredient and recipe models
//!
//! Read-only inputs to shopping-list aggregation. Ingredient identity for
//! aggregation purposes is the case-insensitive (name, unit) pair; no unit
//! conversion happens here, so "flour, g" and "flour, cup" stay distinct.

use serde::{Deserialize, Serialize};

/// Store aisle bucket for shopping-list grouping
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AisleCategory {
    Produce,
    Meat,
    Dairy,
    Pantry,
    Frozen,
    #[default]
    Other,
}

impl AisleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AisleCategory::Produce => "Produce",
            AisleCategory::Meat => "Meat",
            AisleCategory::Dairy => "Dairy",
            AisleCategory::Pantry => "Pantry",
            AisleCategory::Frozen => "Frozen",
            AisleCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "produce" => Some(AisleCategory::Produce),
            "meat" => Some(AisleCategory::Meat),
            "dairy" => Some(AisleCategory::Dairy),
            "pantry" => Some(AisleCategory::Pantry),
            "frozen" => Some(AisleCategory::Frozen),
            "other" => Some(AisleCategory::Other),
            _ => None,
        }
    }
}

/// A quantity of one ingredient in one unit
///
/// `category` defaults to [`AisleCategory::Other`] so records without one
/// still bucket correctly during aisle grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub category: AisleCategory,
}

impl Ingredient {
    /// Aggregation key for this ingredient
    pub fn key(&self) -> IngredientKey {
        IngredientKey::new(&self.name, &self.unit)
    }
}

/// Case-normalized (name, unit) aggregation key
///
/// A composite struct rather than a joined string, so a separator character
/// appearing in an ingredient name can never collide two distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IngredientKey {
    pub name: String,
    pub unit: String,
}

impl IngredientKey {
    /// Build a key, lowercasing and trimming both parts
    pub fn new(name: &str, unit: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            unit: unit.trim().to_lowercase(),
        }
    }
}

/// A recipe: a named list of ingredients
///
/// Read-only input to aggregation; no lifecycle beyond being passed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}
