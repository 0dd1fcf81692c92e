//! Scoring policy: condition lookup table, factor weights and tier thresholds
//!
//! These numbers are policy, not structure. They live here so they can be
//! tuned (or loaded from configuration) and tested on their own.

use crate::models::ConditionCategory;
use crate::RideCastError;
use serde::{Deserialize, Serialize};

/// Comfortable riding band for the day temperature (°C)
pub const COMFORT_MIN_C: f64 = 15.0;
pub const COMFORT_MAX_C: f64 = 25.0;
/// Temperatures at which the temperature factor reaches zero
pub const FREEZING_C: f64 = 0.0;
pub const EXTREME_HEAT_C: f64 = 38.0;

/// Wind speeds (m/s) shaping the wind factor
pub const CALM_WIND_MS: f64 = 3.0;
pub const SAFE_WIND_MS: f64 = 10.0;
pub const MAX_WIND_MS: f64 = 15.0;
/// Wind factor left at the safety threshold
pub const SAFE_WIND_SCORE: f64 = 40.0;

/// Sub-score (0-100) for a sky condition
#[must_use]
pub fn condition_score(category: ConditionCategory) -> u8 {
    match category {
        ConditionCategory::Clear => 100,
        ConditionCategory::Clouds => 85,
        ConditionCategory::Mist | ConditionCategory::Haze => 60,
        ConditionCategory::Drizzle => 45,
        ConditionCategory::Fog => 40,
        ConditionCategory::Smoke => 30,
        ConditionCategory::Dust | ConditionCategory::Sand => 25,
        ConditionCategory::Rain => 20,
        ConditionCategory::Snow | ConditionCategory::Squall => 10,
        ConditionCategory::Ash => 5,
        ConditionCategory::Thunderstorm | ConditionCategory::Tornado => 0,
        ConditionCategory::Unknown => 50,
    }
}

/// Relative weight of each factor in the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    #[serde(default = "default_temperature_weight")]
    pub temperature: f64,
    #[serde(default = "default_wind_weight")]
    pub wind: f64,
    #[serde(default = "default_precipitation_weight")]
    pub precipitation: f64,
    #[serde(default = "default_conditions_weight")]
    pub conditions: f64,
}

/// Lowest score (inclusive) for each recommendation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    #[serde(default = "default_excellent_threshold")]
    pub excellent: u8,
    #[serde(default = "default_good_threshold")]
    pub good: u8,
    #[serde(default = "default_fair_threshold")]
    pub fair: u8,
    #[serde(default = "default_poor_threshold")]
    pub poor: u8,
}

/// Complete scoring policy used by the riding score engine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringPolicy {
    #[serde(default)]
    pub weights: FactorWeights,
    #[serde(default)]
    pub thresholds: TierThresholds,
}

fn default_temperature_weight() -> f64 {
    0.25
}

fn default_wind_weight() -> f64 {
    0.15
}

fn default_precipitation_weight() -> f64 {
    0.30
}

fn default_conditions_weight() -> f64 {
    0.30
}

fn default_excellent_threshold() -> u8 {
    80
}

fn default_good_threshold() -> u8 {
    60
}

fn default_fair_threshold() -> u8 {
    40
}

fn default_poor_threshold() -> u8 {
    20
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            temperature: default_temperature_weight(),
            wind: default_wind_weight(),
            precipitation: default_precipitation_weight(),
            conditions: default_conditions_weight(),
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent: default_excellent_threshold(),
            good: default_good_threshold(),
            fair: default_fair_threshold(),
            poor: default_poor_threshold(),
        }
    }
}

impl FactorWeights {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.temperature + self.wind + self.precipitation + self.conditions
    }

    pub fn validate(&self) -> crate::Result<()> {
        let weights = [
            ("temperature", self.temperature),
            ("wind", self.wind),
            ("precipitation", self.precipitation),
            ("conditions", self.conditions),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(RideCastError::config(format!(
                    "Scoring weight '{name}' must be a non-negative number, got {weight}"
                )));
            }
        }

        if self.total() <= 0.0 {
            return Err(RideCastError::config("Scoring weights cannot all be zero"));
        }

        Ok(())
    }
}

impl TierThresholds {
    pub fn validate(&self) -> crate::Result<()> {
        let descending =
            self.excellent > self.good && self.good > self.fair && self.fair > self.poor;
        if !descending || self.poor == 0 || self.excellent > 100 {
            return Err(RideCastError::config(format!(
                "Tier thresholds must satisfy 100 >= excellent > good > fair > poor > 0, got {}/{}/{}/{}",
                self.excellent, self.good, self.fair, self.poor
            )));
        }
        Ok(())
    }
}

impl ScoringPolicy {
    pub fn validate(&self) -> crate::Result<()> {
        self.weights.validate()?;
        self.thresholds.validate()
    }
}
