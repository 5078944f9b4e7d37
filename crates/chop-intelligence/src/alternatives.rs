// ABOUTME: Cheaper same-category ingredient substitutions for a recipe
// ABOUTME: Helps affordability by listing alternatives and the achievable savings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ingredient alternatives.
//!
//! For each ingredient of a recipe, looks up cheaper foods in the same
//! category and reports the savings per kg against the cheapest
//! option. Candidate order follows corpus order; the first few cheaper
//! matches are listed.

use chop_core::models::{Food, Recipe};
use chop_core::AppResult;
use serde::{Deserialize, Serialize};

use crate::planner::MealRecommendationEngine;
use crate::repository::{FoodQuery, NutritionRepository};

/// A substitution suggestion for one recipe ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientAlternative {
    /// The ingredient's current food
    pub original: Food,
    /// Cheaper same-category foods, capped at the configured count
    pub alternatives: Vec<Food>,
    /// Price-per-kg savings against the cheapest alternative
    pub savings: f64,
}

impl<R: NutritionRepository> MealRecommendationEngine<R> {
    /// Suggest cheaper alternatives for each ingredient of a recipe.
    ///
    /// Ingredients with no cheaper same-category option are omitted.
    pub async fn alternative_ingredients(
        &self,
        recipe: &Recipe,
    ) -> AppResult<Vec<IngredientAlternative>> {
        let mut suggestions = Vec::new();

        for ingredient in &recipe.ingredients {
            let food = &ingredient.food;
            let query = FoodQuery {
                category: Some(food.category.clone()),
                price_below: Some(food.price_per_kg),
                ..FoodQuery::default()
            };
            let mut cheaper: Vec<Food> = self
                .repo
                .find_foods(&query)
                .await?
                .into_iter()
                .filter(|candidate| candidate.id != food.id)
                .collect();
            cheaper.truncate(self.config.limits.alternatives_per_ingredient);

            if cheaper.is_empty() {
                continue;
            }

            let cheapest = cheaper
                .iter()
                .map(|candidate| candidate.price_per_kg)
                .fold(f64::INFINITY, f64::min);

            suggestions.push(IngredientAlternative {
                original: food.clone(),
                alternatives: cheaper,
                savings: food.price_per_kg - cheapest,
            });
        }

        Ok(suggestions)
    }
}
