//! Riding module
//!
//! This module provides the algorithmic core:
//! - Daily aggregation of 3-hour forecast samples
//! - Scoring policy tables (condition lookup, weights, tier thresholds)
//! - The bike riding score engine

pub mod aggregator;
pub mod policy;
pub mod score;

// Re-export commonly used types from submodules
pub use aggregator::{DailyAggregator, DEFAULT_MAX_DAYS};
pub use policy::{FactorWeights, ScoringPolicy, TierThresholds};
pub use score::{BikeRidingScore, Factor, FactorKind, RidingRecommendation, RidingScoreEngine};
