// ABOUTME: Candidate filter: conjunctive narrowing by meal type, diet, health, allergies
// ABOUTME: Every filter is a set intersection; result order follows corpus order
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate filtering.
//!
//! Each filter is a no-op when the corresponding profile attribute is
//! false or empty, and all filters are set intersections, so the
//! application order cannot change the result. Corpus iteration order
//! is preserved; downstream ranking relies on it for tie-breaking.

use chop_core::models::{MealType, Recipe, UserProfile};
use tracing::trace;

/// Narrow a recipe corpus to candidates for one meal slot.
#[must_use]
pub fn filter_candidates(
    recipes: Vec<Recipe>,
    meal_type: MealType,
    profile: &UserProfile,
) -> Vec<Recipe> {
    let allergens = profile.allergen_tokens();

    let candidates: Vec<Recipe> = recipes
        .into_iter()
        .filter(|recipe| recipe.meal_type == meal_type)
        .filter(|recipe| !profile.is_vegetarian || recipe.is_vegetarian)
        .filter(|recipe| !profile.is_vegan || recipe.is_vegan)
        .filter(|recipe| !profile.is_halal || recipe.is_halal)
        .filter(|recipe| {
            !profile.has_diabetes
                || recipe
                    .ingredients
                    .iter()
                    .all(|ingredient| ingredient.food.suitable_for_diabetes)
        })
        .filter(|recipe| {
            !profile.has_hypertension
                || recipe
                    .ingredients
                    .iter()
                    .all(|ingredient| ingredient.food.suitable_for_hypertension)
        })
        .filter(|recipe| !contains_allergen(recipe, &allergens))
        .collect();

    trace!(
        meal_type = meal_type.as_str(),
        candidates = candidates.len(),
        "filtered meal candidates"
    );
    candidates
}

/// Whether any ingredient's food name contains any allergen token as a
/// case-insensitive substring.
fn contains_allergen(recipe: &Recipe, allergens: &[String]) -> bool {
    allergens.iter().any(|allergen| {
        recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.food.name.to_lowercase().contains(allergen))
    })
}
