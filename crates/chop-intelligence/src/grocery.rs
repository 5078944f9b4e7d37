// ABOUTME: Grocery list aggregation across multi-day composed plans
// ABOUTME: Sums ingredient grams and cost per food name, sorted by cost descending
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grocery list aggregation.
//!
//! Runs the composer once per day in the range and accumulates the
//! ingredients of each slot's top-ranked recommendation, keyed by food
//! name. Each composer run is independent and side-effect-free on the
//! corpus; no caching or intermediate plan persistence is involved.

use std::collections::HashMap;

use chrono::{Days, NaiveDate, Utc};
use chop_core::models::UserProfile;
use chop_core::AppResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::planner::{MealRecommendationEngine, MealSlot};
use crate::repository::NutritionRepository;

/// One aggregated grocery line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Food name
    pub item: String,
    /// Total quantity needed
    pub quantity: f64,
    /// Unit of the quantity (always grams)
    pub unit: String,
    /// Estimated cost, rounded to 2 decimals
    pub estimated_cost: f64,
}

/// A grocery list covering a number of plan days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryList {
    /// Lines sorted by estimated cost, most expensive first
    pub items: Vec<GroceryItem>,
    /// Sum of all line costs
    pub total_cost: f64,
    /// Number of plan days covered
    pub days: u32,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl<R: NutritionRepository> MealRecommendationEngine<R> {
    /// Aggregate a grocery list for `days` of plans starting today.
    /// `None` uses the configured default (7 days).
    pub async fn suggest_grocery_list(
        &self,
        profile: &UserProfile,
        days: Option<u32>,
    ) -> AppResult<GroceryList> {
        let days = days.unwrap_or(self.config.defaults.grocery_days);
        self.suggest_grocery_list_from(profile, Utc::now().date_naive(), days)
            .await
    }

    /// Aggregate a grocery list for `days` of plans starting at
    /// `start_date`.
    ///
    /// Uses only the top-ranked recommendation per slot. Quantities
    /// accumulate in grams; line cost is `price_per_kg × grams / 1000`.
    pub async fn suggest_grocery_list_from(
        &self,
        profile: &UserProfile,
        start_date: NaiveDate,
        days: u32,
    ) -> AppResult<GroceryList> {
        // Vec accumulator keeps first-seen order so equal-cost lines
        // stay deterministic after the final sort
        let mut lines: Vec<(String, f64, f64)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for offset in 0..days {
            let date = start_date + Days::new(u64::from(offset));
            let plan = self.generate_daily_meal_plan(profile, Some(date)).await?;

            for slot in MealSlot::ALL {
                let Some(top) = plan.slot(slot).first() else {
                    continue;
                };
                for ingredient in &top.recipe.ingredients {
                    let cost = ingredient.food.price_per_kg * ingredient.quantity_g / 1000.0;
                    match index.get(&ingredient.food.name) {
                        Some(&i) => {
                            lines[i].1 += ingredient.quantity_g;
                            lines[i].2 += cost;
                        }
                        None => {
                            index.insert(ingredient.food.name.clone(), lines.len());
                            lines.push((ingredient.food.name.clone(), ingredient.quantity_g, cost));
                        }
                    }
                }
            }
        }

        let mut items: Vec<GroceryItem> = lines
            .into_iter()
            .map(|(item, quantity, cost)| GroceryItem {
                item,
                quantity,
                unit: "g".to_owned(),
                estimated_cost: round2(cost),
            })
            .collect();

        items.sort_by(|a, b| {
            b.estimated_cost
                .partial_cmp(&a.estimated_cost)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total_cost = round2(items.iter().map(|item| item.estimated_cost).sum());

        debug!(
            user_id = %profile.id,
            days,
            item_count = items.len(),
            total_cost,
            "aggregated grocery list"
        );

        Ok(GroceryList {
            items,
            total_cost,
            days,
        })
    }
}
