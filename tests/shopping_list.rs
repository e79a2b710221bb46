//! End-to-end shopping-list pipeline over JSON recipe fixtures.

use dieta_core::models::{AisleCategory, Ingredient, IngredientKey, Recipe};
use dieta_core::nutrition::{
    aggregate_ingredients, categorize_by_aisle, filter_with_pantry, Pantry,
};

const WEEK_RECIPES: &str = r#"[
    {
        "id": "chicken-rice",
        "name": "Chicken and Rice",
        "ingredients": [
            {"name": "Chicken Breast", "quantity": 400.0, "unit": "g", "category": "Meat"},
            {"name": "Rice", "quantity": 200.0, "unit": "g", "category": "Pantry"},
            {"name": "Olive Oil", "quantity": 2.0, "unit": "tbsp", "category": "Pantry"},
            {"name": "Spinach", "quantity": 150.0, "unit": "g", "category": "Produce"}
        ]
    },
    {
        "id": "chicken-salad",
        "name": "Chicken Salad",
        "ingredients": [
            {"name": "chicken breast", "quantity": 300.0, "unit": "g", "category": "Meat"},
            {"name": "Olive Oil", "quantity": 1.0, "unit": "tbsp", "category": "Pantry"},
            {"name": "Tomatoes", "quantity": 3.0, "unit": "each", "category": "Produce"},
            {"name": "Feta", "quantity": 100.0, "unit": "g", "category": "Dairy"}
        ]
    },
    {
        "id": "veggie-stirfry",
        "name": "Veggie Stir-fry",
        "ingredients": [
            {"name": "Rice", "quantity": 150.0, "unit": "g", "category": "Pantry"},
            {"name": "Mixed Vegetables", "quantity": 400.0, "unit": "g", "category": "Frozen"},
            {"name": "Soy Sauce", "quantity": 30.0, "unit": "ml"}
        ]
    }
]"#;

fn week_recipes() -> Vec<Recipe> {
    init_tracing();
    serde_json::from_str(WEEK_RECIPES).expect("fixture parses")
}

/// Surface aggregation debug logs under RUST_LOG when a test fails
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn aggregation_consolidates_across_recipes() {
    let list = aggregate_ingredients(&week_recipes());

    // 4 + 4 + 3 ingredient occurrences collapse into 8 distinct keys
    assert_eq!(list.len(), 8);

    let chicken = &list[&IngredientKey::new("chicken breast", "g")];
    assert!((chicken.quantity - 700.0).abs() < 0.001);

    let rice = &list[&IngredientKey::new("rice", "g")];
    assert!((rice.quantity - 350.0).abs() < 0.001);

    let oil = &list[&IngredientKey::new("olive oil", "tbsp")];
    assert!((oil.quantity - 3.0).abs() < 0.001);
}

#[test]
fn pantry_then_aisles_produces_the_final_list() {
    let list = aggregate_ingredients(&week_recipes());

    let mut pantry = Pantry::new();
    // Covers rice entirely, chicken partially
    pantry.insert(
        IngredientKey::new("Rice", "g"),
        Ingredient {
            name: "Rice".to_string(),
            quantity: 500.0,
            unit: "g".to_string(),
            category: AisleCategory::Pantry,
        },
    );
    pantry.insert(
        IngredientKey::new("Chicken Breast", "g"),
        Ingredient {
            name: "Chicken Breast".to_string(),
            quantity: 250.0,
            unit: "g".to_string(),
            category: AisleCategory::Meat,
        },
    );

    let to_buy = filter_with_pantry(&list, &pantry);
    assert_eq!(to_buy.len(), 7);

    let chicken = to_buy.iter().find(|i| i.name == "Chicken Breast").unwrap();
    assert!((chicken.quantity - 450.0).abs() < 0.001);
    assert!(to_buy.iter().all(|i| i.name != "Rice"));

    let by_aisle = categorize_by_aisle(&to_buy);
    assert_eq!(by_aisle[&AisleCategory::Meat].len(), 1);
    assert_eq!(by_aisle[&AisleCategory::Produce].len(), 2);
    assert_eq!(by_aisle[&AisleCategory::Dairy].len(), 1);
    assert_eq!(by_aisle[&AisleCategory::Frozen].len(), 1);
    // Olive oil remains in Pantry; soy sauce had no category and lands in Other
    assert_eq!(by_aisle[&AisleCategory::Pantry].len(), 1);
    assert_eq!(by_aisle[&AisleCategory::Other][0].name, "Soy Sauce");
}

#[test]
fn flour_from_two_recipes_sums_to_one_entry() {
    let recipes: Vec<Recipe> = serde_json::from_str(
        r#"[
            {"id": "a", "name": "A", "ingredients":
                [{"name": "Flour", "quantity": 100.0, "unit": "g", "category": "Pantry"}]},
            {"id": "b", "name": "B", "ingredients":
                [{"name": "Flour", "quantity": 100.0, "unit": "g", "category": "Pantry"}]}
        ]"#,
    )
    .unwrap();

    let list = aggregate_ingredients(&recipes);
    assert_eq!(list.len(), 1);
    assert!((list[&IngredientKey::new("flour", "g")].quantity - 200.0).abs() < 0.001);
}
