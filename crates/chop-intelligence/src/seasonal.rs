// ABOUTME: Seasonal recipe recommendations based on in-season ingredient availability
// ABOUTME: Recipes using seasonal foods for the month, rating descending, top 10
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seasonal recommendations.
//!
//! Finds foods in season for the month, collects recipes that use any
//! of them, applies the profile's vegetarian/vegan filters, and
//! returns the highest-rated recipes. Month matching against the
//! free-text availability field keeps the original substring
//! semantics; see [`chop_core::models::Food::available_in`].

use std::collections::HashSet;

use chrono::Utc;
use chop_core::models::{Month, Recipe, UserProfile};
use chop_core::AppResult;
use tracing::debug;
use uuid::Uuid;

use crate::planner::MealRecommendationEngine;
use crate::repository::{FoodQuery, NutritionRepository, RecipeQuery};

impl<R: NutritionRepository> MealRecommendationEngine<R> {
    /// Seasonal recipe recommendations for the current month.
    pub async fn seasonal_recommendations(
        &self,
        profile: &UserProfile,
    ) -> AppResult<Vec<Recipe>> {
        self.seasonal_recommendations_for_month(profile, Month::from_date(Utc::now().date_naive()))
            .await
    }

    /// Seasonal recipe recommendations for an explicit month.
    pub async fn seasonal_recommendations_for_month(
        &self,
        profile: &UserProfile,
        month: Month,
    ) -> AppResult<Vec<Recipe>> {
        let seasonal_foods = self
            .repo
            .find_foods(&FoodQuery {
                seasonal_in: Some(month),
                ..FoodQuery::default()
            })
            .await?;
        let seasonal_ids: HashSet<Uuid> = seasonal_foods.iter().map(|food| food.id).collect();

        let mut recipes: Vec<Recipe> = self
            .repo
            .find_recipes(&RecipeQuery::default())
            .await?
            .into_iter()
            .filter(|recipe| {
                recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| seasonal_ids.contains(&ingredient.food.id))
            })
            .filter(|recipe| !profile.is_vegetarian || recipe.is_vegetarian)
            .filter(|recipe| !profile.is_vegan || recipe.is_vegan)
            .collect();

        // Stable sort: equal ratings keep corpus order
        recipes.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recipes.truncate(self.config.limits.seasonal_recommendations);

        debug!(
            month = month.abbrev(),
            seasonal_foods = seasonal_ids.len(),
            recipes = recipes.len(),
            "seasonal recommendations"
        );
        Ok(recipes)
    }
}
