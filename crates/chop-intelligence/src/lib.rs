// ABOUTME: Meal recommendation engine for the chop platform
// ABOUTME: Filtering, scoring, plan composition, grocery aggregation, and gap analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # chop-intelligence
//!
//! The recommendation engine behind chop's daily meal suggestions.
//!
//! The engine is invoked synchronously once per request and has no
//! shared mutable state; every operation is a pure function of the
//! profile, the corpus snapshot behind [`repository::NutritionRepository`],
//! and the target date. Nothing in this crate is fatal: missing
//! profile data degrades to documented defaults, empty candidate sets
//! surface as empty lists, and arithmetic guards zero out score
//! components instead of faulting.
//!
//! Control flow: [`MealRecommendationEngine::generate_daily_meal_plan`]
//! splits the daily calorie/budget targets across four slots, runs the
//! candidate [`filter`] and the [`scoring`] pipeline per slot, and
//! returns ranked [`MealRecommendation`]s. The grocery aggregator and
//! the nutritional gap analyzer consume composed plans and meal logs
//! independently.

/// Cheaper same-category ingredient substitutions
pub mod alternatives;
/// Engine limits, slot splits, defaults, and gap thresholds
pub mod config;
/// Conjunctive candidate narrowing by diet, health, and allergies
pub mod filter;
/// Nutritional gap analysis over historical meal logs
pub mod gaps;
/// Multi-day grocery list aggregation
pub mod grocery;
/// Daily plan composition and the engine facade
pub mod planner;
/// BMI and Harris-Benedict daily calorie targets
pub mod profile;
/// Corpus access traits and the in-memory implementation
pub mod repository;
/// The five-component recipe match scorer
pub mod scoring;
/// Seasonal recipe recommendations
pub mod seasonal;

pub use alternatives::IngredientAlternative;
pub use config::EngineConfig;
pub use gaps::{Nutrient, NutrientGap};
pub use grocery::{GroceryItem, GroceryList};
pub use planner::{DailyMealPlan, MealRecommendation, MealRecommendationEngine, MealSlot};
pub use repository::{FoodQuery, InMemoryRepository, NutritionRepository, RecipeQuery};
