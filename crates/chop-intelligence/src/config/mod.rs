// ABOUTME: Engine configuration re-exports
// ABOUTME: Limits, slot splits, defaults, and gap-analysis thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine configuration.

mod engine;

pub use engine::{
    EngineConfig, EngineDefaults, GapAnalysisConfig, RecommendationLimits, SlotSplit,
};
