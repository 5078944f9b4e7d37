// ABOUTME: User health and dietary profile consumed by the recommendation engine
// ABOUTME: Gender, ActivityLevel, HealthGoal enums and the UserProfile value object
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::nutrition::{activity_multipliers, goal_adjustments};

/// User gender, as relevant to the Harris-Benedict equation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (uses the male BMR coefficients)
    Male,
    /// Female (uses the female BMR coefficients)
    Female,
    /// Other/unspecified (uses the female BMR coefficients)
    Other,
}

/// Self-reported weekly activity level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Physical job or training twice per day
    VeryActive,
    /// Unrecognized level from an upstream data source
    Other,
}

impl ActivityLevel {
    /// Parse an activity level from free text, degrading unknown
    /// values to [`ActivityLevel::Other`].
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Other,
        }
    }

    /// Daily energy expenditure multiplier applied on top of BMR.
    ///
    /// Unrecognized levels carry the moderate multiplier (1.55).
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => activity_multipliers::SEDENTARY,
            Self::Light => activity_multipliers::LIGHT,
            Self::Moderate => activity_multipliers::MODERATE,
            Self::Active => activity_multipliers::ACTIVE,
            Self::VeryActive => activity_multipliers::VERY_ACTIVE,
            Self::Other => activity_multipliers::DEFAULT,
        }
    }
}

/// Health goal driving calorie adjustment and nutrition scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Calorie deficit, low-carb scoring bias
    LoseWeight,
    /// Maintain current weight
    Maintain,
    /// Calorie surplus
    GainWeight,
    /// High-protein scoring bias
    MuscleGain,
    /// Balanced default
    GeneralHealth,
}

impl HealthGoal {
    /// Parse a health goal from free text, degrading unknown values
    /// to [`HealthGoal::GeneralHealth`].
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose_weight" => Self::LoseWeight,
            "maintain" => Self::Maintain,
            "gain_weight" => Self::GainWeight,
            "muscle_gain" => Self::MuscleGain,
            _ => Self::GeneralHealth,
        }
    }

    /// Multiplier applied to the activity-adjusted calorie target.
    #[must_use]
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            Self::LoseWeight => goal_adjustments::LOSE_WEIGHT,
            Self::GainWeight => goal_adjustments::GAIN_WEIGHT,
            Self::Maintain | Self::MuscleGain | Self::GeneralHealth => goal_adjustments::NEUTRAL,
        }
    }
}

/// User nutrition/health profile.
///
/// Body metrics are optional: when any of weight, height, birth date,
/// or gender is missing, the calorie calculator falls back to its
/// fixed default rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: Uuid,
    /// Gender, if provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Birth date, if provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Self-reported activity level
    pub activity_level: ActivityLevel,
    /// Health goal
    pub health_goal: HealthGoal,
    /// Vegetarian diet flag
    pub is_vegetarian: bool,
    /// Vegan diet flag
    pub is_vegan: bool,
    /// Halal diet flag
    pub is_halal: bool,
    /// Diabetes flag; restricts candidates to suitable ingredients
    pub has_diabetes: bool,
    /// Hypertension flag; restricts candidates to suitable ingredients
    pub has_hypertension: bool,
    /// Free-text comma-separated allergy list
    pub allergies: String,
    /// Daily food budget in currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_budget: Option<f64>,
}

impl UserProfile {
    /// Create a profile with no body metrics, no restrictions, and
    /// neutral activity/goal settings.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            gender: None,
            birth_date: None,
            height_cm: None,
            weight_kg: None,
            activity_level: ActivityLevel::Moderate,
            health_goal: HealthGoal::GeneralHealth,
            is_vegetarian: false,
            is_vegan: false,
            is_halal: false,
            has_diabetes: false,
            has_hypertension: false,
            allergies: String::new(),
            daily_budget: None,
        }
    }

    /// Body mass index, when both height and weight are present.
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let (height_cm, weight_kg) = (self.height_cm?, self.weight_kg?);
        if height_cm <= 0.0 {
            return None;
        }
        let height_m = height_cm / 100.0;
        Some(weight_kg / (height_m * height_m))
    }

    /// Normalized allergen tokens: comma-split, trimmed, lowercased,
    /// empties dropped.
    #[must_use]
    pub fn allergen_tokens(&self) -> Vec<String> {
        self.allergies
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect()
    }
}
