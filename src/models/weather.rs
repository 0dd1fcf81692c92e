//! Raw 3-hour forecast samples and weather condition categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single weather condition as reported by the forecast provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Condition group (e.g. "Clear", "Rain")
    pub main: String,
    /// Human-readable description (e.g. "light rain")
    pub description: String,
    /// Provider icon identifier (e.g. "10d")
    pub icon: String,
}

impl WeatherCondition {
    pub fn new(
        main: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            main: main.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }

    /// Category of this condition's `main` group
    #[must_use]
    pub fn category(&self) -> ConditionCategory {
        ConditionCategory::from_main(&self.main)
    }
}

/// One 3-hour forecast sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastEntry {
    /// Seconds since the Unix epoch (UTC)
    pub timestamp: i64,
    /// Minimum temperature in Celsius
    pub temp_min: f64,
    /// Maximum temperature in Celsius
    pub temp_max: f64,
    /// Temperature at the sample time in Celsius
    pub temp_current: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Probability of precipitation (0.0-1.0)
    pub precipitation_probability: f64,
    /// Reported conditions, most significant first
    pub weather_conditions: Vec<WeatherCondition>,
}

impl RawForecastEntry {
    /// Check the caller contract for a single sample
    pub fn validate(&self) -> crate::Result<()> {
        if self.weather_conditions.is_empty() {
            return Err(crate::RideCastError::validation(format!(
                "forecast entry at {} has no weather conditions",
                self.timestamp
            )));
        }

        let numbers = [
            ("temp_min", self.temp_min),
            ("temp_max", self.temp_max),
            ("temp_current", self.temp_current),
            ("wind_speed", self.wind_speed),
            ("precipitation_probability", self.precipitation_probability),
        ];
        if let Some((field, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(crate::RideCastError::validation(format!(
                "forecast entry at {} has non-finite {field}: {value}",
                self.timestamp
            )));
        }

        Ok(())
    }
}

/// Weather condition groups, as used by the `main` field of OpenWeather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Mist,
    Haze,
    Fog,
    Smoke,
    Dust,
    Sand,
    Ash,
    Squall,
    Tornado,
    /// Any group the provider reports that is not listed above
    Unknown,
}

impl ConditionCategory {
    /// Map a provider `main` string to a category (case-insensitive)
    #[must_use]
    pub fn from_main(main: &str) -> Self {
        match main.trim().to_ascii_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "drizzle" => Self::Drizzle,
            "rain" => Self::Rain,
            "snow" => Self::Snow,
            "thunderstorm" => Self::Thunderstorm,
            "mist" => Self::Mist,
            "haze" => Self::Haze,
            "fog" => Self::Fog,
            "smoke" => Self::Smoke,
            "dust" => Self::Dust,
            "sand" => Self::Sand,
            "ash" => Self::Ash,
            "squall" => Self::Squall,
            "tornado" => Self::Tornado,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConditionCategory::Clear => "clear skies",
            ConditionCategory::Clouds => "clouds",
            ConditionCategory::Drizzle => "drizzle",
            ConditionCategory::Rain => "rain",
            ConditionCategory::Snow => "snow",
            ConditionCategory::Thunderstorm => "thunderstorms",
            ConditionCategory::Mist => "mist",
            ConditionCategory::Haze => "haze",
            ConditionCategory::Fog => "fog",
            ConditionCategory::Smoke => "smoke",
            ConditionCategory::Dust => "dust",
            ConditionCategory::Sand => "sand",
            ConditionCategory::Ash => "volcanic ash",
            ConditionCategory::Squall => "squalls",
            ConditionCategory::Tornado => "tornado",
            ConditionCategory::Unknown => "unknown conditions",
        };
        write!(f, "{name}")
    }
}
