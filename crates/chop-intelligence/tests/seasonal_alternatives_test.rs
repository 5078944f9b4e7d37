// ABOUTME: Integration tests for seasonal recommendations and ingredient alternatives
// ABOUTME: Covers month substring matching, rating order, caps, and savings math
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chop_core::models::{Food, MealType, Month, Recipe};
use chop_intelligence::{InMemoryRepository, MealRecommendationEngine};
use common::{food, ingredient, init_test_logging, plain_profile, recipe};

fn seasonal_food(name: &str, months: &str) -> Food {
    let mut f = food(name, "Vegetables", 600.0);
    f.is_seasonal = true;
    f.available_months = months.to_owned();
    f
}

fn corpus() -> (Vec<Recipe>, Vec<Food>) {
    let corn = seasonal_food("Fresh Corn", "Jun,Jul,Aug");
    let mango = seasonal_food("Mango", "Mar,Apr,May");
    let rice = food("Rice", "Grains", 1200.0); // not seasonal

    let mut corn_dish = recipe(
        "Corn Porridge",
        MealType::Dinner,
        2,
        900.0,
        800.0,
        4.8,
        vec![ingredient(corn.clone(), 300.0)],
    );
    corn_dish.is_vegetarian = true;

    let corn_snack = recipe(
        "Roast Corn",
        MealType::Snack,
        1,
        250.0,
        200.0,
        4.1,
        vec![ingredient(corn.clone(), 200.0)],
    );

    let mango_snack = recipe(
        "Mango Salad",
        MealType::Snack,
        1,
        180.0,
        300.0,
        4.5,
        vec![ingredient(mango.clone(), 250.0)],
    );

    let rice_dish = recipe(
        "Plain Rice",
        MealType::Lunch,
        2,
        1000.0,
        600.0,
        3.9,
        vec![ingredient(rice.clone(), 300.0)],
    );

    (
        vec![corn_dish, corn_snack, mango_snack, rice_dish],
        vec![corn, mango, rice],
    )
}

fn engine() -> MealRecommendationEngine<InMemoryRepository> {
    init_test_logging();
    let (recipes, foods) = corpus();
    MealRecommendationEngine::new(InMemoryRepository::new(recipes, foods, Vec::new()))
}

#[tokio::test]
async fn seasonal_recipes_follow_the_month() -> Result<()> {
    let engine = engine();
    let profile = plain_profile();

    let july = engine
        .seasonal_recommendations_for_month(&profile, Month::Jul)
        .await?;
    let names: Vec<&str> = july.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Corn Porridge", "Roast Corn"]);

    let april = engine
        .seasonal_recommendations_for_month(&profile, Month::Apr)
        .await?;
    let names: Vec<&str> = april.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Mango Salad"]);
    Ok(())
}

#[tokio::test]
async fn results_are_ordered_by_rating_descending() -> Result<()> {
    let engine = engine();
    let profile = plain_profile();

    let july = engine
        .seasonal_recommendations_for_month(&profile, Month::Jul)
        .await?;
    for pair in july.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
    Ok(())
}

#[tokio::test]
async fn month_matching_tolerates_full_month_names() -> Result<()> {
    init_test_logging();
    let pepper = seasonal_food("Fresh Pepper", "january,february");
    let dish = recipe(
        "Pepper Soup",
        MealType::Dinner,
        2,
        700.0,
        900.0,
        4.4,
        vec![ingredient(pepper.clone(), 150.0)],
    );
    let engine =
        MealRecommendationEngine::new(InMemoryRepository::new(vec![dish], vec![pepper], Vec::new()));

    let jan = engine
        .seasonal_recommendations_for_month(&plain_profile(), Month::Jan)
        .await?;
    assert_eq!(jan.len(), 1);
    Ok(())
}

#[tokio::test]
async fn vegetarian_filter_applies_to_seasonal_results() -> Result<()> {
    let engine = engine();
    let mut profile = plain_profile();
    profile.is_vegetarian = true;

    let july = engine
        .seasonal_recommendations_for_month(&profile, Month::Jul)
        .await?;
    // Only the vegetarian corn dish survives
    assert_eq!(july.len(), 1);
    assert_eq!(july[0].name, "Corn Porridge");
    Ok(())
}

#[tokio::test]
async fn alternatives_list_cheaper_same_category_foods() -> Result<()> {
    init_test_logging();
    let expensive = food("Goat Meat", "Proteins", 5000.0);
    let cheaper_a = food("Chicken", "Proteins", 3200.0);
    let cheaper_b = food("Beans", "Proteins", 1100.0);
    let other_category = food("Rice", "Grains", 900.0);

    let dish = recipe(
        "Goat Stew",
        MealType::Dinner,
        4,
        2000.0,
        6000.0,
        4.6,
        vec![ingredient(expensive.clone(), 500.0)],
    );

    let engine = MealRecommendationEngine::new(InMemoryRepository::new(
        Vec::new(),
        vec![expensive, cheaper_a, cheaper_b, other_category],
        Vec::new(),
    ));

    let suggestions = engine.alternative_ingredients(&dish).await?;
    assert_eq!(suggestions.len(), 1);
    let s = &suggestions[0];
    assert_eq!(s.original.name, "Goat Meat");
    assert_eq!(s.alternatives.len(), 2);
    assert!(s.alternatives.iter().all(|f| f.category == "Proteins"));
    assert!(s.alternatives.iter().all(|f| f.price_per_kg < 5000.0));
    // Savings against the cheapest option
    assert!((s.savings - (5000.0 - 1100.0)).abs() < 1e-9);
    Ok(())
}

#[tokio::test]
async fn ingredients_without_cheaper_options_are_omitted() -> Result<()> {
    init_test_logging();
    let cheapest = food("Garri", "Grains", 400.0);
    let pricier = food("Rice", "Grains", 1200.0);

    let dish = recipe(
        "Eba",
        MealType::Dinner,
        2,
        800.0,
        500.0,
        4.0,
        vec![ingredient(cheapest.clone(), 250.0)],
    );

    let engine = MealRecommendationEngine::new(InMemoryRepository::new(
        Vec::new(),
        vec![cheapest, pricier],
        Vec::new(),
    ));

    let suggestions = engine.alternative_ingredients(&dish).await?;
    assert!(suggestions.is_empty());
    Ok(())
}
