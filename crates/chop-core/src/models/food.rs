// ABOUTME: Food items with per-100g nutrition, pricing, and seasonal availability
// ABOUTME: Month enum keeps typed month handling over the free-text availability field
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Calendar month used for seasonal availability checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Month {
    /// January
    Jan,
    /// February
    Feb,
    /// March
    Mar,
    /// April
    Apr,
    /// May
    May,
    /// June
    Jun,
    /// July
    Jul,
    /// August
    Aug,
    /// September
    Sep,
    /// October
    Oct,
    /// November
    Nov,
    /// December
    Dec,
}

impl Month {
    /// Three-letter abbreviation matching the ingestion format of
    /// `available_months` (e.g. "Jan,Feb,Mar").
    #[must_use]
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }

    /// Month of the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        match date.month() {
            1 => Self::Jan,
            2 => Self::Feb,
            3 => Self::Mar,
            4 => Self::Apr,
            5 => Self::May,
            6 => Self::Jun,
            7 => Self::Jul,
            8 => Self::Aug,
            9 => Self::Sep,
            10 => Self::Oct,
            11 => Self::Nov,
            _ => Self::Dec,
        }
    }
}

/// A food item with per-100g nutrition and market pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Unique food identifier
    pub id: Uuid,
    /// Food name (allergen matching runs against this field)
    pub name: String,
    /// Category name (e.g. "Grains", "Proteins")
    pub category: String,
    /// Calories per 100g
    pub calories: f64,
    /// Protein in grams per 100g
    pub protein: f64,
    /// Carbohydrates in grams per 100g
    pub carbohydrates: f64,
    /// Fats in grams per 100g
    pub fats: f64,
    /// Fiber in grams per 100g
    pub fiber: f64,
    /// Iron in mg per 100g
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    /// Calcium in mg per 100g
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    /// Vitamin A in mcg per 100g
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_a: Option<f64>,
    /// Whether availability varies by season
    pub is_seasonal: bool,
    /// Free-text month list from ingestion (e.g. "Jan,Feb,Mar")
    pub available_months: String,
    /// Average market price per kilogram
    pub price_per_kg: f64,
    /// Vegetarian-suitable flag
    pub is_vegetarian: bool,
    /// Vegan-suitable flag
    pub is_vegan: bool,
    /// Halal-suitable flag
    pub is_halal: bool,
    /// Gluten-free flag
    pub is_gluten_free: bool,
    /// Suitable for diabetic users
    pub suitable_for_diabetes: bool,
    /// Suitable for hypertensive users
    pub suitable_for_hypertension: bool,
}

impl Food {
    /// Whether the free-text month list covers the given month.
    ///
    /// Case-insensitive substring match against the raw field, so
    /// "January" and "jan,feb" both match [`Month::Jan`]. This keeps
    /// compatibility with existing ingested data; typed callers only
    /// ever see [`Month`].
    #[must_use]
    pub fn available_in(&self, month: Month) -> bool {
        self.available_months
            .to_lowercase()
            .contains(&month.abbrev().to_lowercase())
    }
}
