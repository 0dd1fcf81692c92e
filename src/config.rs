//! Configuration management for `RideCast`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::models::ForecastZone;
use crate::riding::ScoringPolicy;
use crate::riding_forecast::DEFAULT_ICON_BASE_URL;
use crate::RideCastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `RideCast`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RideCastConfig {
    /// Day grouping settings
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Scoring weights and tier thresholds
    #[serde(default)]
    pub scoring: ScoringPolicy,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Day grouping settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Time zone for calendar-day boundaries ("UTC", "Europe/Berlin", "+02:00")
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Maximum number of days returned
    #[serde(default = "default_max_days")]
    pub max_days: usize,
    /// Base URL for weather icons
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_max_days() -> usize {
    crate::riding::DEFAULT_MAX_DAYS
}

fn default_icon_base_url() -> String {
    DEFAULT_ICON_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            max_days: default_max_days(),
            icon_base_url: default_icon_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl RideCastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. RIDECAST_FORECAST__TIMEZONE
        builder = builder.add_source(
            Environment::with_prefix("RIDECAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: RideCastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", config_file.display()))?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ridecast").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.forecast.timezone.is_empty() {
            self.forecast.timezone = default_timezone();
        }
        if self.forecast.max_days == 0 {
            self.forecast.max_days = default_max_days();
        }
        if self.forecast.icon_base_url.is_empty() {
            self.forecast.icon_base_url = default_icon_base_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        self.validate_forecast()?;
        self.scoring.validate()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_forecast(&self) -> crate::Result<()> {
        self.forecast
            .timezone
            .parse::<ForecastZone>()
            .map_err(|e| RideCastError::config(e.to_string()))?;

        if self.forecast.max_days == 0 || self.forecast.max_days > 16 {
            return Err(RideCastError::config(
                "Forecast max_days must be between 1 and 16",
            ));
        }

        let url = &self.forecast.icon_base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RideCastError::config(
                "Icon base URL must be a valid HTTP or HTTPS URL",
            ));
        }

        Ok(())
    }

    fn validate_logging(&self) -> crate::Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(RideCastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(RideCastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}
