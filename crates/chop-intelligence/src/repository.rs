// ABOUTME: Corpus access seam: NutritionRepository trait and query criteria
// ABOUTME: Ships an in-memory implementation for tests and embedded use
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Corpus access.
//!
//! The engine never talks to a storage product directly; it consumes a
//! [`NutritionRepository`] snapshot. Implementations must preserve
//! corpus insertion order in their results. The engine's ranking ties
//! break on that order, so reordering would silently change output.

use async_trait::async_trait;
use chrono::NaiveDate;
use chop_core::models::{Food, MealLog, MealType, Month, Recipe};
use chop_core::AppResult;
use uuid::Uuid;

/// Criteria for recipe lookups.
#[derive(Debug, Clone, Default)]
pub struct RecipeQuery {
    /// Restrict to one meal category
    pub meal_type: Option<MealType>,
}

impl RecipeQuery {
    /// Query for a single meal category.
    #[must_use]
    pub fn for_meal_type(meal_type: MealType) -> Self {
        Self {
            meal_type: Some(meal_type),
        }
    }
}

/// Criteria for food lookups. All criteria are conjunctive; `None`
/// fields do not constrain.
#[derive(Debug, Clone, Default)]
pub struct FoodQuery {
    /// Exact category name
    pub category: Option<String>,
    /// Strictly cheaper than this price per kg
    pub price_below: Option<f64>,
    /// At least this much protein per 100g
    pub min_protein: Option<f64>,
    /// At least this much iron per 100g (foods without iron data are
    /// excluded)
    pub min_iron: Option<f64>,
    /// Seasonal foods available in the given month
    pub seasonal_in: Option<Month>,
}

/// Read access to the recipe/food corpus and user meal history.
///
/// Reads may be assumed consistent for the duration of one engine
/// invocation; no live updates are observed mid-computation.
#[async_trait]
pub trait NutritionRepository: Send + Sync {
    /// Recipes matching the query, in corpus order.
    async fn find_recipes(&self, query: &RecipeQuery) -> AppResult<Vec<Recipe>>;

    /// Foods matching the query, in corpus order.
    async fn find_foods(&self, query: &FoodQuery) -> AppResult<Vec<Food>>;

    /// Meal logs for a user dated on or after `since`.
    async fn meal_logs_since(&self, user_id: Uuid, since: NaiveDate) -> AppResult<Vec<MealLog>>;
}

/// In-memory corpus, used as the test fixture backend and for
/// embedding the engine without a storage layer.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    recipes: Vec<Recipe>,
    foods: Vec<Food>,
    logs: Vec<MealLog>,
}

impl InMemoryRepository {
    /// Build a corpus snapshot. Iteration order of results follows the
    /// order of these vectors.
    #[must_use]
    pub fn new(recipes: Vec<Recipe>, foods: Vec<Food>, logs: Vec<MealLog>) -> Self {
        Self {
            recipes,
            foods,
            logs,
        }
    }

    fn food_matches(query: &FoodQuery, food: &Food) -> bool {
        if let Some(category) = &query.category {
            if &food.category != category {
                return false;
            }
        }
        if let Some(ceiling) = query.price_below {
            if food.price_per_kg >= ceiling {
                return false;
            }
        }
        if let Some(min) = query.min_protein {
            if food.protein < min {
                return false;
            }
        }
        if let Some(min) = query.min_iron {
            if !food.iron.is_some_and(|iron| iron >= min) {
                return false;
            }
        }
        if let Some(month) = query.seasonal_in {
            if !(food.is_seasonal && food.available_in(month)) {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl NutritionRepository for InMemoryRepository {
    async fn find_recipes(&self, query: &RecipeQuery) -> AppResult<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| {
                query
                    .meal_type
                    .is_none_or(|meal_type| recipe.meal_type == meal_type)
            })
            .cloned()
            .collect())
    }

    async fn find_foods(&self, query: &FoodQuery) -> AppResult<Vec<Food>> {
        Ok(self
            .foods
            .iter()
            .filter(|food| Self::food_matches(query, food))
            .cloned()
            .collect())
    }

    async fn meal_logs_since(&self, user_id: Uuid, since: NaiveDate) -> AppResult<Vec<MealLog>> {
        Ok(self
            .logs
            .iter()
            .filter(|log| log.user_id == user_id && log.date >= since)
            .cloned()
            .collect())
    }
}
