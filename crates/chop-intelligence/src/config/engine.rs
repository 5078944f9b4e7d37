// ABOUTME: Engine configuration: result limits, slot splits, defaults, gap thresholds
// ABOUTME: Defaults reproduce the documented recommendation contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine Configuration
//!
//! Tunable limits and thresholds for the recommendation pipeline. The
//! five scoring formulas are contractual and keep their weights as
//! constants in [`crate::scoring`]; only genuinely tunable knobs live
//! here.

use chop_core::constants::nutrition::{daily_requirements, defaults};
use serde::{Deserialize, Serialize};

use crate::planner::MealSlot;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Result-set size limits
    pub limits: RecommendationLimits,
    /// Calorie/budget distribution across meal slots
    pub slot_split: SlotSplit,
    /// Fail-soft defaults for incomplete profiles
    pub defaults: EngineDefaults,
    /// Gap-analysis window, baselines, and thresholds
    pub gaps: GapAnalysisConfig,
}

/// Limits on recommendation result sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Ranked recommendations returned per meal slot
    pub recommendations_per_slot: usize,
    /// Recipes returned by seasonal recommendations
    pub seasonal_recommendations: usize,
    /// Remediation foods suggested per detected nutrient gap
    pub suggested_foods_per_gap: usize,
    /// Cheaper alternatives listed per recipe ingredient
    pub alternatives_per_ingredient: usize,
}

/// Fraction of the daily calorie and budget targets assigned to each
/// meal slot. The four fractions sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSplit {
    /// Breakfast share
    pub breakfast: f64,
    /// Lunch share
    pub lunch: f64,
    /// Dinner share
    pub dinner: f64,
    /// Snack share
    pub snacks: f64,
}

impl SlotSplit {
    /// Share of the daily targets for the given slot.
    #[must_use]
    pub fn fraction(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snacks => self.snacks,
        }
    }
}

/// Fail-soft defaults applied when profile data is incomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineDefaults {
    /// Daily calorie target when body metrics are missing
    pub daily_calories: u32,
    /// Daily budget when the profile does not configure one
    pub daily_budget: f64,
    /// Days covered by a grocery list when the caller does not say
    pub grocery_days: u32,
}

/// Gap-analysis configuration: look-back window, daily requirement
/// baselines, and suggestion floors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysisConfig {
    /// Trailing window of meal logs to analyze, in days
    pub window_days: i64,
    /// Fraction of the weekly requirement below which a gap is flagged
    pub coverage_ratio: f64,
    /// Daily protein requirement in grams
    pub daily_protein_g: f64,
    /// Daily iron requirement in milligrams
    pub daily_iron_mg: f64,
    /// Daily calcium requirement in milligrams (tracked, not yet
    /// gap-checked)
    pub daily_calcium_mg: f64,
    /// Daily vitamin A requirement in micrograms (tracked, not yet
    /// gap-checked)
    pub daily_vitamin_a_mcg: f64,
    /// Minimum protein per 100g for a food to qualify as a suggestion
    pub suggestion_min_protein: f64,
    /// Minimum iron per 100g for a food to qualify as a suggestion
    pub suggestion_min_iron: f64,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            recommendations_per_slot: 3,
            seasonal_recommendations: 10,
            suggested_foods_per_gap: 5,
            alternatives_per_ingredient: 3,
        }
    }
}

impl Default for SlotSplit {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snacks: 0.10,
        }
    }
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            daily_calories: defaults::DAILY_CALORIES,
            daily_budget: defaults::DAILY_BUDGET,
            grocery_days: 7,
        }
    }
}

impl Default for GapAnalysisConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            coverage_ratio: 0.7,
            daily_protein_g: daily_requirements::PROTEIN_G,
            daily_iron_mg: daily_requirements::IRON_MG,
            daily_calcium_mg: daily_requirements::CALCIUM_MG,
            daily_vitamin_a_mcg: daily_requirements::VITAMIN_A_MCG,
            suggestion_min_protein: 20.0,
            suggestion_min_iron: 2.0,
        }
    }
}
