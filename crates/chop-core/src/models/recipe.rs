// ABOUTME: Recipes with aggregate nutrition/cost and per-serving derivations
// ABOUTME: MealType and Difficulty enums plus the rating running-average computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::food::Food;

/// Meal category a recipe belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Stable lowercase name, matching the wire/storage spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

/// Preparation difficulty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Simple preparation
    Easy,
    /// Moderate preparation
    Medium,
    /// Involved preparation
    Hard,
}

impl Difficulty {
    /// Parse a difficulty from free text, degrading unknown values to
    /// [`Difficulty::Medium`] (which carries the default preference
    /// weight).
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }
}

/// One ingredient line of a recipe.
///
/// Embeds its [`Food`] as a value object; the engine only ever reads
/// the corpus, so there is no need for an id-based join here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// The food used
    pub food: Food,
    /// Quantity in grams
    pub quantity_g: f64,
    /// Free-text preparation note (e.g. "chopped")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A recipe with aggregate (not per-serving) nutrition and cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Recipe name
    pub name: String,
    /// Meal category
    pub meal_type: MealType,
    /// Preparation difficulty
    pub difficulty: Difficulty,
    /// Preparation time in minutes
    pub prep_time_minutes: u32,
    /// Cooking time in minutes
    pub cook_time_minutes: u32,
    /// Number of servings the aggregate fields cover. A value of zero
    /// is a data-validation failure; per-serving accessors guard it.
    pub servings: u32,
    /// Estimated total cost for all servings
    pub estimated_cost: f64,
    /// Total calories across all servings
    pub total_calories: f64,
    /// Total protein in grams across all servings
    pub total_protein: f64,
    /// Total carbohydrates in grams across all servings
    pub total_carbs: f64,
    /// Total fats in grams across all servings
    pub total_fats: f64,
    /// Vegetarian tag
    pub is_vegetarian: bool,
    /// Vegan tag
    pub is_vegan: bool,
    /// Halal tag
    pub is_halal: bool,
    /// Average user rating, 0.0-5.0
    pub rating: f64,
    /// How many times users made this recipe
    pub times_made: u32,
    /// Ordered ingredient list
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Calories per serving, `None` when `servings` is zero.
    #[must_use]
    pub fn calories_per_serving(&self) -> Option<f64> {
        self.per_serving(self.total_calories)
    }

    /// Cost per serving, `None` when `servings` is zero.
    #[must_use]
    pub fn cost_per_serving(&self) -> Option<f64> {
        self.per_serving(self.estimated_cost)
    }

    /// Protein per serving, `None` when `servings` is zero.
    #[must_use]
    pub fn protein_per_serving(&self) -> Option<f64> {
        self.per_serving(self.total_protein)
    }

    /// Carbohydrates per serving, `None` when `servings` is zero.
    #[must_use]
    pub fn carbs_per_serving(&self) -> Option<f64> {
        self.per_serving(self.total_carbs)
    }

    fn per_serving(&self, total: f64) -> Option<f64> {
        (self.servings >= 1).then(|| total / f64::from(self.servings))
    }

    /// Rating after folding in one more user rating as a running
    /// weighted average: `(rating × times_made + new) / (times_made + 1)`.
    ///
    /// Pure computation; serializing concurrent updates per recipe is
    /// the persistence layer's responsibility.
    #[must_use]
    pub fn rating_after(&self, new_rating: f64) -> f64 {
        let made = f64::from(self.times_made);
        (self.rating * made + new_rating) / (made + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(servings: u32) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            name: "Jollof Rice".to_owned(),
            meal_type: MealType::Lunch,
            difficulty: Difficulty::Medium,
            prep_time_minutes: 20,
            cook_time_minutes: 45,
            servings,
            estimated_cost: 2400.0,
            total_calories: 1800.0,
            total_protein: 48.0,
            total_carbs: 260.0,
            total_fats: 40.0,
            is_vegetarian: false,
            is_vegan: false,
            is_halal: true,
            rating: 4.0,
            times_made: 3,
            ingredients: Vec::new(),
        }
    }

    #[test]
    fn per_serving_divides_aggregates() {
        let r = recipe(4);
        assert!((r.calories_per_serving().unwrap() - 450.0).abs() < f64::EPSILON);
        assert!((r.cost_per_serving().unwrap() - 600.0).abs() < f64::EPSILON);
        assert!((r.protein_per_serving().unwrap() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_servings_never_divides() {
        let r = recipe(0);
        assert!(r.calories_per_serving().is_none());
        assert!(r.cost_per_serving().is_none());
        assert!(r.carbs_per_serving().is_none());
    }

    #[test]
    fn rating_running_average() {
        let r = recipe(4);
        // (4.0 * 3 + 5.0) / 4 = 4.25
        assert!((r.rating_after(5.0) - 4.25).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_difficulty_degrades_to_medium() {
        assert_eq!(Difficulty::from_str_lossy("expert"), Difficulty::Medium);
        assert_eq!(Difficulty::from_str_lossy("Easy"), Difficulty::Easy);
    }
}
