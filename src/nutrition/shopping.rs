//! Shopping-list aggregation
//!
//! Consolidates ingredients across recipes, subtracts pantry stock, and
//! groups what remains by store aisle. Identity is the case-insensitive
//! (name, unit) pair; quantities in different units are never converted and
//! stay separate entries.

use std::collections::BTreeMap;

use crate::models::{AisleCategory, Ingredient, IngredientKey, Recipe};

/// Consolidated shopping list keyed by normalized (name, unit)
pub type ShoppingList = BTreeMap<IngredientKey, Ingredient>;

/// Quantities already owned, same keying scheme as [`ShoppingList`]
pub type Pantry = BTreeMap<IngredientKey, Ingredient>;

/// Consolidate the ingredients of the selected recipes
///
/// Occurrences sharing a key have their quantities summed; the first
/// occurrence's name casing and category are kept.
pub fn aggregate_ingredients(recipes: &[Recipe]) -> ShoppingList {
    let mut aggregated = ShoppingList::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            aggregated
                .entry(ingredient.key())
                .and_modify(|existing| existing.quantity += ingredient.quantity)
                .or_insert_with(|| ingredient.clone());
        }
    }

    tracing::debug!(
        recipes = recipes.len(),
        items = aggregated.len(),
        "ingredients aggregated"
    );

    aggregated
}

/// Subtract pantry stock from a shopping list
///
/// Entries fully covered by the pantry are dropped; partially covered
/// entries keep only the positive remainder; entries without a pantry match
/// pass through unchanged. Emission follows shopping-list iteration order.
pub fn filter_with_pantry(shopping_list: &ShoppingList, pantry: &Pantry) -> Vec<Ingredient> {
    let mut final_items = Vec::new();

    for (key, ingredient) in shopping_list {
        match pantry.get(key) {
            Some(stocked) => {
                let remaining = ingredient.quantity - stocked.quantity;
                if remaining > 0.0 {
                    final_items.push(Ingredient {
                        quantity: remaining,
                        ..ingredient.clone()
                    });
                } else {
                    tracing::debug!(name = %ingredient.name, unit = %ingredient.unit, "pantry covers item");
                }
            }
            None => final_items.push(ingredient.clone()),
        }
    }

    final_items
}

/// Group items by store aisle, preserving input order within each aisle
pub fn categorize_by_aisle(items: &[Ingredient]) -> BTreeMap<AisleCategory, Vec<Ingredient>> {
    let mut by_aisle: BTreeMap<AisleCategory, Vec<Ingredient>> = BTreeMap::new();

    for item in items {
        by_aisle.entry(item.category).or_default().push(item.clone());
    }

    by_aisle
}
