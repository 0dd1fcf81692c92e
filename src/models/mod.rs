//! Data models for the RideCast library
//!
//! This module contains the core domain models organized by concern:
//! - Weather: raw 3-hour samples and condition categories
//! - Forecast: the consolidated per-day record
//! - Zone: the time zone deciding calendar-day boundaries
//! - OpenWeather: the provider payload feeding the raw samples

pub mod forecast;
pub mod openweather;
pub mod weather;
pub mod zone;

// Re-export all public types for convenient access
pub use forecast::{DailyForecast, Temperature};
pub use openweather::ForecastResponse;
pub use weather::{ConditionCategory, RawForecastEntry, WeatherCondition};
pub use zone::ForecastZone;
