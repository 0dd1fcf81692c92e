//! Bike Riding Score Engine
//!
//! Scores a single [`DailyForecast`] for cycling suitability. Each factor is
//! scored on its own (0-100), the factors are combined with the policy
//! weights, and the result is mapped onto a recommendation tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::policy::{
    self, ScoringPolicy, TierThresholds, CALM_WIND_MS, COMFORT_MAX_C, COMFORT_MIN_C,
    EXTREME_HEAT_C, FREEZING_C, MAX_WIND_MS, SAFE_WIND_MS, SAFE_WIND_SCORE,
};
use crate::models::DailyForecast;

/// Discrete recommendation, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RidingRecommendation {
    NotRecommended,
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Category of a contributing factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorKind {
    Temperature,
    Wind,
    Precipitation,
    Conditions,
}

/// One named contributor to the overall score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub name: FactorKind,
    pub description: String,
    /// Standalone score before weighting (0-100)
    pub sub_score: u8,
}

/// Riding suitability of one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BikeRidingScore {
    /// Overall score (0-100)
    pub score: u8,
    pub recommendation: RidingRecommendation,
    pub overall_rating: String,
    pub factors: Vec<Factor>,
}

impl BikeRidingScore {
    /// Look up a factor by kind
    #[must_use]
    pub fn factor(&self, kind: FactorKind) -> Option<&Factor> {
        self.factors.iter().find(|f| f.name == kind)
    }
}

/// Computes [`BikeRidingScore`]s under a fixed [`ScoringPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RidingScoreEngine {
    policy: ScoringPolicy,
}

impl RidingScoreEngine {
    #[must_use]
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score one day. Pure: equal input always gives equal output.
    #[must_use]
    pub fn score(&self, day: &DailyForecast) -> BikeRidingScore {
        let temperature = temperature_factor(day);
        let wind = wind_factor(day.wind_speed);
        let precipitation = precipitation_factor(day.precipitation_probability);
        let conditions = conditions_factor(day);

        let weights = &self.policy.weights;
        let weighted = [
            (weights.temperature, temperature.sub_score),
            (weights.wind, wind.sub_score),
            (weights.precipitation, precipitation.sub_score),
            (weights.conditions, conditions.sub_score),
        ];
        let total_weight = weights.total();
        let combined = if total_weight > 0.0 {
            weighted
                .iter()
                .map(|(w, s)| w * f64::from(*s))
                .sum::<f64>()
                / total_weight
        } else {
            0.0
        };
        let score = to_score(combined);

        let recommendation = RidingRecommendation::from_score(score, &self.policy.thresholds);

        BikeRidingScore {
            score,
            recommendation,
            overall_rating: recommendation.rating().to_string(),
            factors: vec![temperature, wind, precipitation, conditions],
        }
    }
}

impl RidingRecommendation {
    /// Map a score onto a tier
    #[must_use]
    pub fn from_score(score: u8, thresholds: &TierThresholds) -> Self {
        match score {
            s if s >= thresholds.excellent => RidingRecommendation::Excellent,
            s if s >= thresholds.good => RidingRecommendation::Good,
            s if s >= thresholds.fair => RidingRecommendation::Fair,
            s if s >= thresholds.poor => RidingRecommendation::Poor,
            _ => RidingRecommendation::NotRecommended,
        }
    }

    /// Short overall rating for this tier
    #[must_use]
    pub fn rating(&self) -> &'static str {
        match self {
            RidingRecommendation::Excellent => "Perfect day for a bike ride",
            RidingRecommendation::Good => "Good conditions for riding",
            RidingRecommendation::Fair => "Rideable, but expect some discomfort",
            RidingRecommendation::Poor => "Poor riding conditions - short trips only",
            RidingRecommendation::NotRecommended => "Not recommended for riding today",
        }
    }
}

fn to_score(value: f64) -> u8 {
    // clamp keeps the cast in range; NaN saturates to 0
    value.clamp(0.0, 100.0).round() as u8
}

/// 100 inside the comfort band, linear to 0 at freezing and at extreme heat
fn temperature_curve(celsius: f64) -> f64 {
    if !celsius.is_finite() {
        return 0.0;
    }
    let value = if celsius < COMFORT_MIN_C {
        (celsius - FREEZING_C) / (COMFORT_MIN_C - FREEZING_C) * 100.0
    } else if celsius > COMFORT_MAX_C {
        (EXTREME_HEAT_C - celsius) / (EXTREME_HEAT_C - COMFORT_MAX_C) * 100.0
    } else {
        100.0
    };
    value.clamp(0.0, 100.0)
}

fn temperature_factor(day: &DailyForecast) -> Factor {
    let base = temperature_curve(day.temperature.day);
    let peak = temperature_curve(day.temperature.max);
    // afternoon heat drags the score down when it is worse than the day reading
    let value = if peak < base {
        base * 0.75 + peak * 0.25
    } else {
        base
    };
    let sub_score = to_score(value);

    // band and label use the same one-decimal reading; `+ 0.0` drops a negative zero
    let temp = (day.temperature.day * 10.0).round() / 10.0 + 0.0;
    let description = if !temp.is_finite() {
        "No usable temperature reading".to_string()
    } else if temp < FREEZING_C {
        format!("{temp:.1}°C is below freezing - icy roads likely")
    } else if temp < COMFORT_MIN_C {
        format!("{temp:.1}°C is on the cool side - dress in layers")
    } else if temp <= COMFORT_MAX_C {
        if peak < base {
            format!(
                "{temp:.1}°C is comfortable, but it climbs to {:.1}°C later",
                day.temperature.max
            )
        } else {
            format!("{temp:.1}°C is ideal riding temperature")
        }
    } else if temp < EXTREME_HEAT_C {
        format!("{temp:.1}°C is hot - carry extra water")
    } else {
        format!("{temp:.1}°C is dangerously hot for riding")
    };

    Factor {
        name: FactorKind::Temperature,
        description,
        sub_score,
    }
}

/// Gentle decay up to the safety threshold, steep beyond it
fn wind_factor(speed_ms: f64) -> Factor {
    let speed = speed_ms.max(0.0);
    let value = if speed <= CALM_WIND_MS {
        100.0
    } else if speed <= SAFE_WIND_MS {
        100.0 - (speed - CALM_WIND_MS) / (SAFE_WIND_MS - CALM_WIND_MS) * (100.0 - SAFE_WIND_SCORE)
    } else {
        SAFE_WIND_SCORE * (MAX_WIND_MS - speed) / (MAX_WIND_MS - SAFE_WIND_MS)
    };
    let sub_score = to_score(value);

    let description = match speed {
        s if s <= CALM_WIND_MS => format!("Calm winds at {s:.1} m/s"),
        s if s <= 6.0 => format!("Light breeze at {s:.1} m/s - barely noticeable"),
        s if s <= SAFE_WIND_MS => {
            format!("Moderate wind at {s:.1} m/s - headwinds will slow you down")
        }
        s => format!("Strong wind at {s:.1} m/s - riding can be unsafe"),
    };

    Factor {
        name: FactorKind::Wind,
        description,
        sub_score,
    }
}

fn precipitation_factor(probability: f64) -> Factor {
    let p = probability.clamp(0.0, 1.0);
    let sub_score = to_score((1.0 - p) * 100.0);
    let percent = (p * 100.0).round();

    let description = match percent {
        pc if pc < 10.0 => format!("{pc:.0}% chance of rain - dry roads expected"),
        pc if pc < 40.0 => format!("{pc:.0}% chance of rain - mostly dry"),
        pc if pc < 70.0 => format!("{pc:.0}% chance of rain - pack a rain jacket"),
        pc => format!("{pc:.0}% chance of rain - wet roads likely"),
    };

    Factor {
        name: FactorKind::Precipitation,
        description,
        sub_score,
    }
}

fn conditions_factor(day: &DailyForecast) -> Factor {
    let category = day.condition_category();
    let sub_score = policy::condition_score(category);

    let label = day
        .dominant_condition()
        .map(|c| c.description.trim())
        .filter(|d| !d.is_empty())
        .map_or_else(|| category.to_string(), str::to_string);

    let verdict = match sub_score {
        80..=100 => "great for riding",
        50..=79 => "reduced visibility or comfort",
        20..=49 => "unpleasant riding weather",
        _ => "dangerous for cyclists",
    };

    Factor {
        name: FactorKind::Conditions,
        description: format!("{label}: {verdict}"),
        sub_score,
    }
}

impl fmt::Display for RidingRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RidingRecommendation::Excellent => write!(f, "Excellent"),
            RidingRecommendation::Good => write!(f, "Good"),
            RidingRecommendation::Fair => write!(f, "Fair"),
            RidingRecommendation::Poor => write!(f, "Poor"),
            RidingRecommendation::NotRecommended => write!(f, "Not Recommended"),
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorKind::Temperature => write!(f, "Temperature"),
            FactorKind::Wind => write!(f, "Wind"),
            FactorKind::Precipitation => write!(f, "Precipitation"),
            FactorKind::Conditions => write!(f, "Conditions"),
        }
    }
}
