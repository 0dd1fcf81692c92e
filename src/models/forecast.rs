//! Consolidated daily forecast model

use super::{ConditionCategory, WeatherCondition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Temperatures for one day in Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Reading of the first sample of the day
    pub day: f64,
    pub min: f64,
    pub max: f64,
    /// Same reading as `day`; there is no separate night computation
    pub night: f64,
}

/// One calendar day's consolidated view of the 3-hour samples.
///
/// `min <= day <= max` does not necessarily hold: `day` is an instantaneous
/// reading while `min`/`max` come from the samples' own ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Timestamp (epoch seconds) of the first sample seen for this day
    pub date: i64,
    pub temperature: Temperature,
    /// The day's dominant condition, as a single-element list
    pub weather_conditions: Vec<WeatherCondition>,
    /// Mean relative humidity in percent, truncated
    pub humidity: u8,
    /// Mean wind speed in m/s
    pub wind_speed: f64,
    /// Mean probability of precipitation (0.0-1.0)
    pub precipitation_probability: f64,
}

impl DailyForecast {
    /// Dominant condition of the day, if any
    #[must_use]
    pub fn dominant_condition(&self) -> Option<&WeatherCondition> {
        self.weather_conditions.first()
    }

    /// Category of the dominant condition, `Unknown` when none is present
    #[must_use]
    pub fn condition_category(&self) -> ConditionCategory {
        self.dominant_condition()
            .map_or(ConditionCategory::Unknown, WeatherCondition::category)
    }

    /// `date` as a UTC date-time
    #[must_use]
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.date, 0)
    }

    /// Format temperature range with unit, whole degrees truncated toward zero
    #[must_use]
    pub fn format_temperature_range(&self) -> String {
        let max = self.temperature.max as i64;
        let min = self.temperature.min as i64;
        format!("{max}° / {min}°")
    }
}
