// ABOUTME: Shared fixtures for chop-intelligence integration tests
// ABOUTME: Quiet test logging plus corpus builders for foods, recipes, and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `chop-intelligence` integration tests.

use std::sync::Once;

use chop_core::models::{
    Difficulty, Food, MealType, Recipe, RecipeIngredient, UserProfile,
};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process).
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// A food with neutral flags; tweak fields per test.
pub fn food(name: &str, category: &str, price_per_kg: f64) -> Food {
    Food {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        category: category.to_owned(),
        calories: 120.0,
        protein: 8.0,
        carbohydrates: 20.0,
        fats: 3.0,
        fiber: 2.0,
        iron: None,
        calcium: None,
        vitamin_a: None,
        is_seasonal: false,
        available_months: String::new(),
        price_per_kg,
        is_vegetarian: true,
        is_vegan: true,
        is_halal: true,
        is_gluten_free: true,
        suitable_for_diabetes: true,
        suitable_for_hypertension: true,
    }
}

/// An ingredient line of `quantity_g` grams of the given food.
pub fn ingredient(food: Food, quantity_g: f64) -> RecipeIngredient {
    RecipeIngredient {
        food,
        quantity_g,
        note: None,
    }
}

/// A recipe with the given aggregates and ingredients; halal,
/// non-vegetarian, medium difficulty by default.
pub fn recipe(
    name: &str,
    meal_type: MealType,
    servings: u32,
    total_calories: f64,
    estimated_cost: f64,
    rating: f64,
    ingredients: Vec<RecipeIngredient>,
) -> Recipe {
    Recipe {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        meal_type,
        difficulty: Difficulty::Medium,
        prep_time_minutes: 15,
        cook_time_minutes: 30,
        servings,
        estimated_cost,
        total_calories,
        total_protein: 40.0,
        total_carbs: 90.0,
        total_fats: 25.0,
        is_vegetarian: false,
        is_vegan: false,
        is_halal: true,
        rating,
        times_made: 2,
        ingredients,
    }
}

/// A profile with no restrictions and no body metrics (2000 kcal
/// fallback, 3000 budget default).
pub fn plain_profile() -> UserProfile {
    UserProfile::new(Uuid::new_v4())
}

/// One recipe per meal type, each sized near the default slot targets
/// so every slot of a daily plan has a candidate.
pub fn one_per_slot_corpus() -> Vec<Recipe> {
    vec![
        // 2000 kcal default: slots get 500/700/600/200 kcal targets
        recipe(
            "Akara and Pap",
            MealType::Breakfast,
            2,
            1000.0,
            1200.0,
            4.0,
            vec![ingredient(food("Beans", "Legumes", 900.0), 250.0)],
        ),
        recipe(
            "Jollof Rice",
            MealType::Lunch,
            2,
            1400.0,
            1800.0,
            4.5,
            vec![
                ingredient(food("Rice", "Grains", 1200.0), 300.0),
                ingredient(food("Tomato", "Vegetables", 600.0), 200.0),
            ],
        ),
        recipe(
            "Eba and Egusi",
            MealType::Dinner,
            2,
            1200.0,
            1600.0,
            4.2,
            vec![
                ingredient(food("Garri", "Grains", 700.0), 250.0),
                ingredient(food("Melon Seed", "Seeds", 2000.0), 150.0),
            ],
        ),
        recipe(
            "Roasted Plantain",
            MealType::Snack,
            2,
            400.0,
            500.0,
            3.8,
            vec![ingredient(food("Plantain", "Fruits", 500.0), 300.0)],
        ),
    ]
}
