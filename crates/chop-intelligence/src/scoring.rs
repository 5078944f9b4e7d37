// ABOUTME: Five-component recipe match scorer with division guards
// ABOUTME: Weights and formulas are contractual; match_percentage keeps its quirk
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe scoring.
//!
//! Computes a composite match score from five additive components:
//! calorie match (30), budget match (25), nutritional balance (20),
//! popularity (15), and difficulty preference (10). Components can
//! individually saturate; no combined cap is enforced.
//!
//! Division guards: a non-positive calorie target or budget zeroes the
//! affected component ("no signal"), and a recipe with zero servings
//! is rejected outright before any per-serving division.

use chop_core::models::{Difficulty, HealthGoal, Recipe};

/// Maximum contribution of the calorie-match component.
pub const CALORIE_WEIGHT: f64 = 30.0;
/// Maximum contribution of the budget-match component.
pub const BUDGET_WEIGHT: f64 = 25.0;
/// Maximum contribution of the nutritional-balance component.
pub const NUTRITION_WEIGHT: f64 = 20.0;
/// Maximum contribution of the popularity component.
pub const POPULARITY_WEIGHT: f64 = 15.0;
/// Maximum contribution of the difficulty-preference component.
pub const DIFFICULTY_WEIGHT: f64 = 10.0;

/// Per-component score breakdown for one recipe.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBreakdown {
    /// Calorie-match contribution, 0..=30
    pub calorie_match: f64,
    /// Budget-match contribution, 0..=25
    pub budget_match: f64,
    /// Nutritional-balance contribution, 0..=20
    pub nutritional_balance: f64,
    /// Popularity contribution, 0..=15
    pub popularity: f64,
    /// Difficulty-preference contribution, 4..=10
    pub difficulty_preference: f64,
}

impl ScoreBreakdown {
    /// Composite match score.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.calorie_match
            + self.budget_match
            + self.nutritional_balance
            + self.popularity
            + self.difficulty_preference
    }
}

/// Display transform from score to a saturating percentage.
///
/// Deliberately `min(score × 10, 100)` rather than a rescaling of the
/// 100-point weight budget: scores as low as 10 already display as a
/// 100% match. The steeper transform is a compatibility contract;
/// do not "fix" it.
#[must_use]
pub fn match_percentage(score: f64) -> f64 {
    (score * 10.0).min(100.0)
}

/// Score one recipe against a calorie target, a budget ceiling, and a
/// health goal.
///
/// Returns `None` for recipes with zero servings; such records are a
/// data-validation failure and must never reach the per-serving
/// divisions.
#[must_use]
pub fn score_recipe(
    recipe: &Recipe,
    target_calories: f64,
    budget: f64,
    goal: HealthGoal,
) -> Option<ScoreBreakdown> {
    let calories_per_serving = recipe.calories_per_serving()?;
    let cost_per_serving = recipe.cost_per_serving()?;
    let protein_per_serving = recipe.protein_per_serving()?;
    let carbs_per_serving = recipe.carbs_per_serving()?;

    let calorie_match = if target_calories > 0.0 {
        let diff = (calories_per_serving - target_calories).abs();
        (CALORIE_WEIGHT - diff / target_calories * CALORIE_WEIGHT).max(0.0)
    } else {
        0.0
    };

    let budget_match = if budget > 0.0 {
        if cost_per_serving <= budget {
            BUDGET_WEIGHT
        } else {
            let over = cost_per_serving - budget;
            (BUDGET_WEIGHT - over / budget * BUDGET_WEIGHT).max(0.0)
        }
    } else {
        0.0
    };

    let nutritional_balance = match goal {
        HealthGoal::MuscleGain => (protein_per_serving / 40.0 * 20.0).min(NUTRITION_WEIGHT),
        HealthGoal::LoseWeight => {
            ((protein_per_serving / 30.0 + (100.0 - carbs_per_serving) / 100.0) * 10.0)
                .min(NUTRITION_WEIGHT)
        }
        HealthGoal::Maintain | HealthGoal::GainWeight | HealthGoal::GeneralHealth => 15.0,
    };

    let popularity = (recipe.rating * 3.0).min(POPULARITY_WEIGHT);

    let difficulty_preference = match recipe.difficulty {
        Difficulty::Easy => 10.0,
        Difficulty::Medium => 7.0,
        Difficulty::Hard => 4.0,
    };

    Some(ScoreBreakdown {
        calorie_match,
        budget_match,
        nutritional_balance,
        popularity,
        difficulty_preference,
    })
}
