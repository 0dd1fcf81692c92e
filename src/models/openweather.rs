//! `OpenWeather` 5-day / 3-hour forecast payload and conversion utilities

use super::{ForecastZone, RawForecastEntry, WeatherCondition};
use serde::{Deserialize, Serialize};

/// Forecast response from the `OpenWeather` `forecast` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Number of samples in `list`
    #[serde(default)]
    pub cnt: u32,
    /// 3-hour samples
    pub list: Vec<ForecastItem>,
    /// Location metadata, when the provider sends it
    #[serde(default)]
    pub city: Option<City>,
}

/// One 3-hour sample as sent by `OpenWeather`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastItem {
    pub dt: i64,
    pub main: MainReadings,
    pub wind: Wind,
    #[serde(default)]
    pub pop: f64,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub name: String,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: i32,
}

impl ForecastResponse {
    /// Decode a metric-unit JSON payload
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Raw samples in payload order
    #[must_use]
    pub fn entries(&self) -> Vec<RawForecastEntry> {
        self.list.iter().cloned().map(RawForecastEntry::from).collect()
    }

    /// Zone of the forecast location, from the city's UTC shift
    pub fn city_zone(&self) -> Option<crate::Result<ForecastZone>> {
        self.city
            .as_ref()
            .map(|city| ForecastZone::from_offset_seconds(city.timezone))
    }
}

impl From<ForecastItem> for RawForecastEntry {
    fn from(item: ForecastItem) -> Self {
        RawForecastEntry {
            timestamp: item.dt,
            temp_min: item.main.temp_min,
            temp_max: item.main.temp_max,
            temp_current: item.main.temp,
            humidity: item.main.humidity,
            wind_speed: item.wind.speed,
            precipitation_probability: item.pop,
            weather_conditions: item.weather,
        }
    }
}
