//! `RideCast` - Daily weather aggregation and bike riding suitability scoring
//!
//! This library turns a multi-day, 3-hour-interval weather forecast into one
//! consolidated forecast per calendar day and scores each day for cycling.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod riding;
pub mod riding_forecast;

// Re-export core types for public API
pub use self::config::RideCastConfig;
pub use error::RideCastError;
pub use models::{
    ConditionCategory, DailyForecast, ForecastResponse, ForecastZone, RawForecastEntry,
    Temperature, WeatherCondition,
};
pub use riding::{
    BikeRidingScore, DailyAggregator, Factor, FactorKind, RidingRecommendation, RidingScoreEngine,
    ScoringPolicy,
};
pub use riding_forecast::{DailyRidingForecast, RidingForecastService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RideCastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
