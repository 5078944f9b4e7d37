// ABOUTME: Composed daily meal plans and historical meal logs
// ABOUTME: MealPlan totals derive from per-serving values; logs feed gap analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recipe::{MealType, Recipe};

/// A composed meal plan for one (user, date) pair.
///
/// The engine never persists these; it produces recommendations the
/// surrounding system assembles into a plan. Uniqueness per
/// (user, date) is a persistence invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    /// Owning user
    pub user_id: Uuid,
    /// Plan date
    pub date: NaiveDate,
    /// Breakfast pick, if any candidate matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Recipe>,
    /// Lunch pick, if any candidate matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Recipe>,
    /// Dinner pick, if any candidate matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Recipe>,
    /// Snack picks
    pub snacks: Vec<Recipe>,
    /// Sum of per-serving calories across all picks
    pub total_calories: f64,
    /// Sum of per-serving cost across all picks
    pub total_cost: f64,
    /// Whether the user reported following the plan
    pub followed: bool,
}

impl MealPlan {
    /// Assemble a plan from per-slot picks, computing totals from
    /// per-serving values. Recipes with zero servings contribute
    /// nothing to totals (division guard).
    #[must_use]
    pub fn assemble(
        user_id: Uuid,
        date: NaiveDate,
        breakfast: Option<Recipe>,
        lunch: Option<Recipe>,
        dinner: Option<Recipe>,
        snacks: Vec<Recipe>,
    ) -> Self {
        let mut plan = Self {
            user_id,
            date,
            breakfast,
            lunch,
            dinner,
            snacks,
            total_calories: 0.0,
            total_cost: 0.0,
            followed: false,
        };
        plan.recalculate_totals();
        plan
    }

    /// Recompute `total_calories` and `total_cost` from the current
    /// picks.
    pub fn recalculate_totals(&mut self) {
        let mut calories = 0.0;
        let mut cost = 0.0;
        let mains = [&self.breakfast, &self.lunch, &self.dinner];
        for recipe in mains.into_iter().flatten().chain(self.snacks.iter()) {
            if let (Some(c), Some(p)) = (recipe.calories_per_serving(), recipe.cost_per_serving()) {
                calories += c;
                cost += p;
            }
        }
        self.total_calories = calories;
        self.total_cost = cost;
    }
}

/// Historical record of what a user actually ate.
///
/// Append-only from the engine's perspective; the gap analyzer reads a
/// trailing window of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLog {
    /// Log entry identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Recipe eaten, when the log references one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    /// Meal category of the log entry
    pub meal_type: MealType,
    /// Date the meal was eaten
    pub date: NaiveDate,
}
