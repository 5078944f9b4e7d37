// ABOUTME: Meal plan composer: slot splits, per-slot recommendation, engine facade
// ABOUTME: MealRecommendationEngine is the public entry point over a NutritionRepository
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily plan composition.
//!
//! The composer splits the daily calorie and budget targets across
//! four meal slots (breakfast 25%, lunch 35%, dinner 30%, snacks 10%),
//! runs the candidate filter and scorer per slot, and returns the
//! ranked top recommendations for each. It persists nothing;
//! [`chop_core::models::MealPlan::assemble`] supports callers that
//! want to store the top picks.

use chrono::{NaiveDate, Utc};
use chop_core::models::{MealPlan, MealType, Recipe, UserProfile};
use chop_core::AppResult;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::filter::filter_candidates;
use crate::profile::daily_calorie_target;
use crate::repository::{NutritionRepository, RecipeQuery};
use crate::scoring::{match_percentage, score_recipe};

/// One of the four meal slots of a daily plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast slot
    Breakfast,
    /// Lunch slot
    Lunch,
    /// Dinner slot
    Dinner,
    /// Snack slot
    Snacks,
}

impl MealSlot {
    /// All slots in plan order.
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Meal category recipes must carry to fill this slot.
    #[must_use]
    pub fn meal_type(self) -> MealType {
        match self {
            Self::Breakfast => MealType::Breakfast,
            Self::Lunch => MealType::Lunch,
            Self::Dinner => MealType::Dinner,
            Self::Snacks => MealType::Snack,
        }
    }
}

/// A ranked recommendation for one slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecommendation {
    /// The recommended recipe
    pub recipe: Recipe,
    /// Composite match score
    pub score: f64,
    /// Saturating display percentage, `min(score × 10, 100)`.
    /// Steeper than the score's own scale; kept as-is for
    /// compatibility.
    pub match_percentage: f64,
    /// Calories per serving of the recipe
    pub calories_per_serving: f64,
    /// Cost per serving of the recipe
    pub cost_per_serving: f64,
}

/// Ranked recommendations for each slot of one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMealPlan {
    /// Plan date
    pub date: NaiveDate,
    /// Ranked breakfast recommendations
    pub breakfast: Vec<MealRecommendation>,
    /// Ranked lunch recommendations
    pub lunch: Vec<MealRecommendation>,
    /// Ranked dinner recommendations
    pub dinner: Vec<MealRecommendation>,
    /// Ranked snack recommendations
    pub snacks: Vec<MealRecommendation>,
}

impl DailyMealPlan {
    /// Recommendations for one slot.
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> &[MealRecommendation] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    /// Assemble a persistable [`MealPlan`] from the top pick of each
    /// slot, with totals recomputed from per-serving values.
    #[must_use]
    pub fn assemble(&self, user_id: Uuid) -> MealPlan {
        let top = |recs: &[MealRecommendation]| recs.first().map(|r| r.recipe.clone());
        MealPlan::assemble(
            user_id,
            self.date,
            top(&self.breakfast),
            top(&self.lunch),
            top(&self.dinner),
            top(&self.snacks).into_iter().collect(),
        )
    }
}

/// The meal recommendation engine.
///
/// Stateless between invocations; holds only the corpus handle and the
/// engine configuration.
pub struct MealRecommendationEngine<R> {
    pub(crate) repo: R,
    pub(crate) config: EngineConfig,
}

impl<R: NutritionRepository> MealRecommendationEngine<R> {
    /// Create an engine with default configuration.
    #[must_use]
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with custom configuration.
    #[must_use]
    pub fn with_config(repo: R, config: EngineConfig) -> Self {
        Self { repo, config }
    }

    /// Daily calorie target for a profile, evaluated as of today.
    /// Falls back to the configured default for incomplete profiles.
    #[must_use]
    pub fn daily_calorie_target(&self, profile: &UserProfile) -> u32 {
        daily_calorie_target(profile, Utc::now().date_naive())
    }

    /// Daily budget for a profile, falling back to the configured
    /// default when the profile has none.
    #[must_use]
    pub fn daily_budget(&self, profile: &UserProfile) -> f64 {
        profile
            .daily_budget
            .unwrap_or(self.config.defaults.daily_budget)
    }

    /// Recommend ranked meals for one slot given its calorie and
    /// budget targets.
    ///
    /// Filters the corpus, scores every candidate, ranks descending by
    /// score with ties broken by corpus order (stable sort), and
    /// returns the configured top-N. An empty result is a legitimate
    /// outcome, not an error.
    pub async fn recommend_meal(
        &self,
        profile: &UserProfile,
        meal_type: MealType,
        target_calories: f64,
        budget: f64,
    ) -> AppResult<Vec<MealRecommendation>> {
        let corpus = self
            .repo
            .find_recipes(&RecipeQuery::for_meal_type(meal_type))
            .await?;
        let candidates = filter_candidates(corpus, meal_type, profile);

        let mut ranked: Vec<MealRecommendation> = candidates
            .into_iter()
            .filter_map(|recipe| {
                let breakdown =
                    score_recipe(&recipe, target_calories, budget, profile.health_goal)?;
                let score = breakdown.total();
                // score_recipe already guarded servings == 0
                let calories_per_serving = recipe.calories_per_serving()?;
                let cost_per_serving = recipe.cost_per_serving()?;
                Some(MealRecommendation {
                    recipe,
                    score,
                    match_percentage: match_percentage(score),
                    calories_per_serving,
                    cost_per_serving,
                })
            })
            .collect();

        // Stable sort keeps corpus order for equal scores
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(self.config.limits.recommendations_per_slot);

        debug!(
            meal_type = meal_type.as_str(),
            target_calories,
            budget,
            returned = ranked.len(),
            "recommended meals for slot"
        );
        Ok(ranked)
    }

    /// Generate a full daily plan for the given date (today when
    /// `None`), splitting calorie and budget targets across the four
    /// slots.
    pub async fn generate_daily_meal_plan(
        &self,
        profile: &UserProfile,
        target_date: Option<NaiveDate>,
    ) -> AppResult<DailyMealPlan> {
        let date = target_date.unwrap_or_else(|| Utc::now().date_naive());
        let daily_calories = f64::from(self.daily_calorie_target(profile));
        let daily_budget = self.daily_budget(profile);

        debug!(
            user_id = %profile.id,
            %date,
            daily_calories,
            daily_budget,
            "composing daily meal plan"
        );

        let mut slots: [Vec<MealRecommendation>; 4] = [const { Vec::new() }; 4];
        for (i, slot) in MealSlot::ALL.into_iter().enumerate() {
            let fraction = self.config.slot_split.fraction(slot);
            slots[i] = self
                .recommend_meal(
                    profile,
                    slot.meal_type(),
                    daily_calories * fraction,
                    daily_budget * fraction,
                )
                .await?;
        }
        let [breakfast, lunch, dinner, snacks] = slots;

        Ok(DailyMealPlan {
            date,
            breakfast,
            lunch,
            dinner,
            snacks,
        })
    }
}
