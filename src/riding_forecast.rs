//! Daily Bike Riding Forecast Module
//!
//! This module combines the daily aggregator and the riding score engine to
//! turn a raw multi-day forecast into per-day riding recommendations.

use crate::config::RideCastConfig;
use crate::models::{DailyForecast, ForecastResponse, ForecastZone, RawForecastEntry};
use crate::riding::{BikeRidingScore, DailyAggregator, RidingScoreEngine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default base URL for provider weather icons
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn/";

/// Date format used for day headers, e.g. "Tue, Jun 4"
const DAY_HEADER_FORMAT: &str = "%a, %b %-d";

/// A consolidated day and its riding score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRidingForecast {
    pub forecast: DailyForecast,
    pub score: BikeRidingScore,
}

/// Bike riding forecast service
#[derive(Debug, Clone)]
pub struct RidingForecastService {
    aggregator: DailyAggregator,
    engine: RidingScoreEngine,
    icon_base_url: String,
}

impl Default for RidingForecastService {
    fn default() -> Self {
        Self::new(DailyAggregator::default(), RidingScoreEngine::default())
    }
}

impl RidingForecastService {
    #[must_use]
    pub fn new(aggregator: DailyAggregator, engine: RidingScoreEngine) -> Self {
        Self {
            aggregator,
            engine,
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
        }
    }

    /// Build a service from validated configuration
    pub fn from_config(config: &RideCastConfig) -> crate::Result<Self> {
        config.scoring.validate()?;
        let zone: ForecastZone = config.forecast.timezone.parse()?;

        let aggregator = DailyAggregator::new(zone, config.forecast.max_days);
        let engine = RidingScoreEngine::new(config.scoring);

        Ok(Self {
            aggregator,
            engine,
            icon_base_url: config.forecast.icon_base_url.clone(),
        })
    }

    #[must_use]
    pub fn zone(&self) -> ForecastZone {
        self.aggregator.zone()
    }

    /// Aggregate raw samples into days and score each day
    pub fn daily_scores(
        &self,
        entries: &[RawForecastEntry],
    ) -> crate::Result<Vec<DailyRidingForecast>> {
        info!(
            "Generating riding forecast from {} samples (zone {}, max {} days)",
            entries.len(),
            self.aggregator.zone(),
            self.aggregator.max_days()
        );

        let days = self.aggregator.aggregate(entries)?;
        let results: Vec<DailyRidingForecast> = days
            .into_iter()
            .map(|forecast| {
                let score = self.engine.score(&forecast);
                debug!(
                    "Day {}: score {} ({})",
                    forecast.date, score.score, score.recommendation
                );
                DailyRidingForecast { forecast, score }
            })
            .collect();

        info!("Scored {} days", results.len());
        Ok(results)
    }

    /// Same as [`Self::daily_scores`], reading samples from a provider payload
    pub fn daily_scores_from_response(
        &self,
        response: &ForecastResponse,
    ) -> crate::Result<Vec<DailyRidingForecast>> {
        self.daily_scores(&response.entries())
    }

    /// Day header in the grouping zone, e.g. "Tue, Jun 4"
    #[must_use]
    pub fn format_date(&self, timestamp: i64) -> Option<String> {
        self.aggregator.zone().format(timestamp, DAY_HEADER_FORMAT)
    }

    /// URL of the provider's icon image
    #[must_use]
    pub fn icon_url(&self, icon: &str) -> String {
        format!("{}{icon}@2x.png", self.icon_base_url)
    }

    /// The best day to ride: highest score, earliest day on ties
    #[must_use]
    pub fn best_day(days: &[DailyRidingForecast]) -> Option<&DailyRidingForecast> {
        days.iter()
            .fold(None, |best: Option<&DailyRidingForecast>, day| match best {
                Some(b) if b.score.score >= day.score.score => Some(b),
                _ => Some(day),
            })
    }
}
