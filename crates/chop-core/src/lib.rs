// ABOUTME: Core domain types and constants for the chop meal recommendation platform
// ABOUTME: Houses user/food/recipe/meal-plan models, engine errors, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # chop-core
//!
//! Foundation crate for the chop meal recommendation platform.
//!
//! Provides the read-only domain value objects the recommendation
//! engine filters and scores ([`models`]), the shared error type
//! ([`errors`]), and the nutrition constants the calorie and
//! requirement calculations are built on ([`constants`]).
//!
//! The engine itself lives in the `chop-intelligence` crate; this
//! crate deliberately has no knowledge of storage, HTTP, or any other
//! delivery concern.

pub mod constants;
pub mod errors;
pub mod models;

pub use errors::{AppResult, EngineError};
