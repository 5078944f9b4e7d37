// ABOUTME: Nutrition constants: Harris-Benedict coefficients, activity multipliers, baselines
// ABOUTME: Single source of truth for the numbers behind calorie and requirement math
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrition constants.
//!
//! Grouped by concern so call sites read as
//! `harris_benedict::MALE_BASE` rather than bare numbers.

/// Harris-Benedict basal metabolic rate coefficients.
///
/// BMR (male)   = 88.362 + 13.397·kg + 4.799·cm − 5.677·age
/// BMR (female) = 447.593 + 9.247·kg + 3.098·cm − 4.330·age
pub mod harris_benedict {
    /// Male equation intercept
    pub const MALE_BASE: f64 = 88.362;
    /// Male weight coefficient (per kg)
    pub const MALE_WEIGHT: f64 = 13.397;
    /// Male height coefficient (per cm)
    pub const MALE_HEIGHT: f64 = 4.799;
    /// Male age coefficient (per year, subtracted)
    pub const MALE_AGE: f64 = 5.677;

    /// Female equation intercept
    pub const FEMALE_BASE: f64 = 447.593;
    /// Female weight coefficient (per kg)
    pub const FEMALE_WEIGHT: f64 = 9.247;
    /// Female height coefficient (per cm)
    pub const FEMALE_HEIGHT: f64 = 3.098;
    /// Female age coefficient (per year, subtracted)
    pub const FEMALE_AGE: f64 = 4.330;
}

/// Daily energy expenditure multipliers per activity level.
pub mod activity_multipliers {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.20;
    /// Exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Physical job or training twice per day
    pub const VERY_ACTIVE: f64 = 1.90;
    /// Fallback for unrecognized activity levels
    pub const DEFAULT: f64 = MODERATE;
}

/// Calorie adjustments applied on top of activity-adjusted BMR.
pub mod goal_adjustments {
    /// 15% deficit for weight loss
    pub const LOSE_WEIGHT: f64 = 0.85;
    /// 15% surplus for weight gain
    pub const GAIN_WEIGHT: f64 = 1.15;
    /// All other goals leave the target unchanged
    pub const NEUTRAL: f64 = 1.0;
}

/// Fail-soft defaults used when profile data is incomplete.
pub mod defaults {
    /// Daily calorie target when weight/height/birth date/gender are
    /// not all present
    pub const DAILY_CALORIES: u32 = 2000;
    /// Daily food budget when the profile does not configure one
    pub const DAILY_BUDGET: f64 = 3000.0;
    /// Days per year used for age computation. Deliberately ignores
    /// leap years; an accepted approximation kept for output
    /// compatibility with historical data.
    pub const DAYS_PER_YEAR: i64 = 365;
}

/// Daily intake requirement baselines used by gap analysis.
pub mod daily_requirements {
    /// Protein, grams per day
    pub const PROTEIN_G: f64 = 50.0;
    /// Iron, milligrams per day
    pub const IRON_MG: f64 = 18.0;
    /// Calcium, milligrams per day
    pub const CALCIUM_MG: f64 = 1000.0;
    /// Vitamin A, micrograms per day
    pub const VITAMIN_A_MCG: f64 = 700.0;
}
