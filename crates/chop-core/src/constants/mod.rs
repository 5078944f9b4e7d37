// ABOUTME: Constant groups consumed by the recommendation engine calculations
// ABOUTME: Re-exports nutrition constants (BMR coefficients, multipliers, baselines)
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named constant groups for nutrition calculations.

pub mod nutrition;
