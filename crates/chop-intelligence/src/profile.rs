// ABOUTME: Nutrient profile calculator: Harris-Benedict daily calorie targets
// ABOUTME: Falls back to a fixed 2000 kcal default when body metrics are incomplete
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily calorie target calculation.
//!
//! Uses the Harris-Benedict equation with sex-specific coefficients,
//! an activity multiplier, and a goal adjustment. Incomplete profiles
//! fail soft to a fixed default rather than erroring, so a
//! recommendation is always available.

use chrono::NaiveDate;
use chop_core::constants::nutrition::{defaults, harris_benedict};
use chop_core::models::{Gender, UserProfile};

/// Daily calorie target for a profile, evaluated as of `today`.
///
/// Returns the fixed default (2000 kcal) unless weight, height, birth
/// date, and gender are all present. Age is computed as whole years
/// via `days / 365`; the missing leap-year correction is an accepted
/// approximation kept for output compatibility.
#[must_use]
pub fn daily_calorie_target(profile: &UserProfile, today: NaiveDate) -> u32 {
    let (Some(weight_kg), Some(height_cm), Some(birth_date), Some(gender)) = (
        profile.weight_kg,
        profile.height_cm,
        profile.birth_date,
        profile.gender,
    ) else {
        return defaults::DAILY_CALORIES;
    };

    let age = ((today - birth_date).num_days() / defaults::DAYS_PER_YEAR) as f64;

    let bmr = match gender {
        Gender::Male => {
            harris_benedict::MALE_BASE + harris_benedict::MALE_WEIGHT * weight_kg
                + harris_benedict::MALE_HEIGHT * height_cm
                - harris_benedict::MALE_AGE * age
        }
        Gender::Female | Gender::Other => {
            harris_benedict::FEMALE_BASE
                + harris_benedict::FEMALE_WEIGHT * weight_kg
                + harris_benedict::FEMALE_HEIGHT * height_cm
                - harris_benedict::FEMALE_AGE * age
        }
    };

    let daily = bmr * profile.activity_level.multiplier() * profile.health_goal.calorie_adjustment();
    daily.round() as u32
}
