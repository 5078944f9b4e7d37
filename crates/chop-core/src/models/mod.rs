// ABOUTME: Domain model re-exports for users, foods, recipes, and meal plans
// ABOUTME: All models are read-only value objects from the engine's perspective
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain models for the chop platform.
//!
//! The recommendation engine treats every model here as a read-only
//! value object; mutation (rating counters, plan persistence) belongs
//! to the surrounding system.

/// Food items with per-100g nutrition and market pricing
pub mod food;
/// Composed daily plans and historical meal logs
pub mod meal_plan;
/// Recipes, their ingredients, and per-serving derivations
pub mod recipe;
/// User health/dietary profiles
pub mod user;

pub use food::{Food, Month};
pub use meal_plan::{MealLog, MealPlan};
pub use recipe::{Difficulty, MealType, Recipe, RecipeIngredient};
pub use user::{ActivityLevel, Gender, HealthGoal, UserProfile};
