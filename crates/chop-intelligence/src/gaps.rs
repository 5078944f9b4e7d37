// ABOUTME: Nutritional gap analysis over a trailing window of meal logs
// ABOUTME: Flags nutrients below 70% of weekly requirements with food suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutritional gap analysis.
//!
//! Accumulates protein, iron, calcium, and vitamin A from the last
//! seven days of a user's meal logs and flags any tracked nutrient
//! whose total falls below 70% of its weekly requirement. Calcium and
//! vitamin A are accumulated but not yet gap-checked; the rule set is
//! intended to grow.

use chrono::{Days, Utc};
use chop_core::models::{Food, UserProfile};
use chop_core::AppResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::planner::MealRecommendationEngine;
use crate::repository::{FoodQuery, NutritionRepository};

/// Nutrients the analyzer tracks.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Protein (grams)
    Protein,
    /// Iron (milligrams)
    Iron,
    /// Calcium (milligrams)
    Calcium,
    /// Vitamin A (micrograms)
    VitaminA,
}

impl Nutrient {
    /// Human-readable nutrient name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::Iron => "Iron",
            Self::Calcium => "Calcium",
            Self::VitaminA => "Vitamin A",
        }
    }
}

/// A detected nutrient deficit with remediation suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientGap {
    /// The deficient nutrient
    pub nutrient: Nutrient,
    /// Weekly requirement minus accumulated intake, in the nutrient's
    /// unit
    pub deficit: f64,
    /// Foods richest in the nutrient, descending, capped at the
    /// configured suggestion count
    pub suggested_foods: Vec<Food>,
}

/// Accumulated intake over the analysis window.
#[derive(Debug, Default, Clone, Copy)]
struct WeeklyIntake {
    protein_g: f64,
    iron_mg: f64,
    calcium_mg: f64,
    vitamin_a_mcg: f64,
}

impl<R: NutritionRepository> MealRecommendationEngine<R> {
    /// Analyze the user's recent meal logs for nutritional gaps.
    pub async fn analyze_nutritional_gaps(
        &self,
        profile: &UserProfile,
    ) -> AppResult<Vec<NutrientGap>> {
        let gaps_config = &self.config.gaps;
        let since = Utc::now().date_naive() - Days::new(gaps_config.window_days as u64);
        let logs = self.repo.meal_logs_since(profile.id, since).await?;

        let mut intake = WeeklyIntake::default();
        for log in &logs {
            let Some(recipe) = &log.recipe else { continue };

            // Per-serving protein; zero-serving records are skipped
            if let Some(protein) = recipe.protein_per_serving() {
                intake.protein_g += protein;
            }

            // Micronutrients come from the ingredient list; values are
            // per 100g of the food
            for ingredient in &recipe.ingredients {
                let factor = ingredient.quantity_g / 100.0;
                if let Some(iron) = ingredient.food.iron {
                    intake.iron_mg += iron * factor;
                }
                if let Some(calcium) = ingredient.food.calcium {
                    intake.calcium_mg += calcium * factor;
                }
                if let Some(vitamin_a) = ingredient.food.vitamin_a {
                    intake.vitamin_a_mcg += vitamin_a * factor;
                }
            }
        }

        let window = gaps_config.window_days as f64;
        let protein_needed = gaps_config.daily_protein_g * window;
        let iron_needed = gaps_config.daily_iron_mg * window;
        // Computed for forward compatibility with future gap rules
        let _calcium_needed = gaps_config.daily_calcium_mg * window;
        let _vitamin_a_needed = gaps_config.daily_vitamin_a_mcg * window;

        let mut gaps = Vec::new();

        if intake.protein_g < protein_needed * gaps_config.coverage_ratio {
            let suggestions = self
                .suggest_foods_rich_in(Nutrient::Protein, gaps_config.suggestion_min_protein)
                .await?;
            gaps.push(NutrientGap {
                nutrient: Nutrient::Protein,
                deficit: protein_needed - intake.protein_g,
                suggested_foods: suggestions,
            });
        }

        if intake.iron_mg < iron_needed * gaps_config.coverage_ratio {
            let suggestions = self
                .suggest_foods_rich_in(Nutrient::Iron, gaps_config.suggestion_min_iron)
                .await?;
            gaps.push(NutrientGap {
                nutrient: Nutrient::Iron,
                deficit: iron_needed - intake.iron_mg,
                suggested_foods: suggestions,
            });
        }

        debug!(
            user_id = %profile.id,
            logs = logs.len(),
            protein_g = intake.protein_g,
            iron_mg = intake.iron_mg,
            gaps = gaps.len(),
            "analyzed nutritional gaps"
        );
        Ok(gaps)
    }

    /// Foods richest in the given nutrient above a floor, descending,
    /// capped at the configured suggestion count.
    async fn suggest_foods_rich_in(&self, nutrient: Nutrient, floor: f64) -> AppResult<Vec<Food>> {
        let query = match nutrient {
            Nutrient::Protein => FoodQuery {
                min_protein: Some(floor),
                ..FoodQuery::default()
            },
            Nutrient::Iron => FoodQuery {
                min_iron: Some(floor),
                ..FoodQuery::default()
            },
            // No gap rule yet, so no suggestion floor defined either
            Nutrient::Calcium | Nutrient::VitaminA => return Ok(Vec::new()),
        };
        let mut foods = self.repo.find_foods(&query).await?;

        let value = |food: &Food| match nutrient {
            Nutrient::Protein => food.protein,
            Nutrient::Iron => food.iron.unwrap_or(0.0),
            Nutrient::Calcium => food.calcium.unwrap_or(0.0),
            Nutrient::VitaminA => food.vitamin_a.unwrap_or(0.0),
        };
        foods.sort_by(|a, b| {
            value(b)
                .partial_cmp(&value(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        foods.truncate(self.config.limits.suggested_foods_per_gap);
        Ok(foods)
    }
}
