// ABOUTME: Integration tests for nutritional gap analysis over meal logs
// ABOUTME: Covers the 70% rule, the 7-day window, and suggestion ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::{Days, Utc};
use chop_core::models::{Food, MealLog, MealType, UserProfile};
use chop_intelligence::{InMemoryRepository, MealRecommendationEngine, Nutrient};
use common::{food, ingredient, init_test_logging, plain_profile, recipe};
use uuid::Uuid;

fn log_for(profile: &UserProfile, recipe: Option<chop_core::models::Recipe>, days_ago: u64) -> MealLog {
    MealLog {
        id: Uuid::new_v4(),
        user_id: profile.id,
        recipe,
        meal_type: MealType::Lunch,
        date: Utc::now().date_naive() - Days::new(days_ago),
    }
}

fn protein_foods() -> Vec<Food> {
    let mut foods = Vec::new();
    for (name, protein) in [
        ("Chicken", 27.0),
        ("Beef", 26.0),
        ("Fish", 22.0),
        ("Soybeans", 36.0),
        ("Eggs", 13.0),   // below the 20g floor, must not be suggested
        ("Lentils", 25.0),
        ("Groundnut", 24.0),
        ("Crayfish", 60.0),
    ] {
        let mut f = food(name, "Proteins", 2000.0);
        f.protein = protein;
        foods.push(f);
    }
    foods
}

fn iron_foods() -> Vec<Food> {
    let mut foods = Vec::new();
    for (name, iron) in [("Liver", 9.0), ("Ugwu", 3.5), ("Spinach", 2.7)] {
        let mut f = food(name, "Vegetables", 800.0);
        f.iron = Some(iron);
        foods.push(f);
    }
    foods
}

#[tokio::test]
async fn empty_history_flags_protein_and_iron() -> Result<()> {
    init_test_logging();
    let mut foods = protein_foods();
    foods.extend(iron_foods());
    let engine =
        MealRecommendationEngine::new(InMemoryRepository::new(Vec::new(), foods, Vec::new()));
    let profile = plain_profile();

    let gaps = engine.analyze_nutritional_gaps(&profile).await?;

    assert_eq!(gaps.len(), 2);
    let protein = gaps.iter().find(|g| g.nutrient == Nutrient::Protein).unwrap();
    let iron = gaps.iter().find(|g| g.nutrient == Nutrient::Iron).unwrap();
    // Full weekly requirements: 50g × 7 and 18mg × 7
    assert!((protein.deficit - 350.0).abs() < 1e-9);
    assert!((iron.deficit - 126.0).abs() < 1e-9);
    Ok(())
}

#[tokio::test]
async fn suggestions_respect_floor_ordering_and_cap() -> Result<()> {
    init_test_logging();
    let engine = MealRecommendationEngine::new(InMemoryRepository::new(
        Vec::new(),
        protein_foods(),
        Vec::new(),
    ));
    let profile = plain_profile();

    let gaps = engine.analyze_nutritional_gaps(&profile).await?;
    let protein = gaps.iter().find(|g| g.nutrient == Nutrient::Protein).unwrap();

    assert_eq!(protein.suggested_foods.len(), 5);
    assert!(protein.suggested_foods.iter().all(|f| f.protein >= 20.0));
    for pair in protein.suggested_foods.windows(2) {
        assert!(pair[0].protein >= pair[1].protein);
    }
    assert_eq!(protein.suggested_foods[0].name, "Crayfish");
    Ok(())
}

#[tokio::test]
async fn sufficient_intake_produces_no_gaps() -> Result<()> {
    init_test_logging();
    let profile = plain_profile();

    // One serving logs 400g protein; iron comes from a 300g liver
    // ingredient at 50mg/100g = 150mg for the week
    let mut liver = food("Liver", "Proteins", 3000.0);
    liver.iron = Some(50.0);
    let mut rich = recipe(
        "Protein Stew",
        MealType::Lunch,
        1,
        900.0,
        1500.0,
        4.0,
        vec![ingredient(liver, 300.0)],
    );
    rich.total_protein = 400.0;

    let logs = vec![log_for(&profile, Some(rich), 1)];
    let engine =
        MealRecommendationEngine::new(InMemoryRepository::new(Vec::new(), Vec::new(), logs));

    let gaps = engine.analyze_nutritional_gaps(&profile).await?;
    assert!(gaps.is_empty());
    Ok(())
}

#[tokio::test]
async fn logs_outside_the_window_are_ignored() -> Result<()> {
    init_test_logging();
    let profile = plain_profile();

    let mut liver = food("Liver", "Proteins", 3000.0);
    liver.iron = Some(50.0);
    let mut rich = recipe(
        "Protein Stew",
        MealType::Lunch,
        1,
        900.0,
        1500.0,
        4.0,
        vec![ingredient(liver, 300.0)],
    );
    rich.total_protein = 400.0;

    // Same intake as the no-gap case, but logged ten days ago
    let logs = vec![log_for(&profile, Some(rich), 10)];
    let engine =
        MealRecommendationEngine::new(InMemoryRepository::new(Vec::new(), Vec::new(), logs));

    let gaps = engine.analyze_nutritional_gaps(&profile).await?;
    assert_eq!(gaps.len(), 2);
    Ok(())
}

#[tokio::test]
async fn recipe_less_logs_contribute_nothing_without_crashing() -> Result<()> {
    init_test_logging();
    let profile = plain_profile();
    let logs = vec![log_for(&profile, None, 2), log_for(&profile, None, 3)];
    let engine =
        MealRecommendationEngine::new(InMemoryRepository::new(Vec::new(), Vec::new(), logs));

    let gaps = engine.analyze_nutritional_gaps(&profile).await?;
    assert_eq!(gaps.len(), 2);
    Ok(())
}
