//! Daily aggregation of 3-hour forecast samples
//!
//! Samples are grouped by local calendar date and each group is reduced to a
//! single [`DailyForecast`]. Grouping is insertion-ordered: days come out in
//! the order their first sample was seen, and the first sample of a day
//! supplies its timestamp and day/night temperature.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::{DailyForecast, ForecastZone, RawForecastEntry, Temperature, WeatherCondition};
use crate::RideCastError;

/// Default number of days kept from a forecast
pub const DEFAULT_MAX_DAYS: usize = 6;

/// Groups raw samples into per-day forecasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyAggregator {
    zone: ForecastZone,
    max_days: usize,
}

impl Default for DailyAggregator {
    fn default() -> Self {
        Self::new(ForecastZone::default(), DEFAULT_MAX_DAYS)
    }
}

impl DailyAggregator {
    #[must_use]
    pub fn new(zone: ForecastZone, max_days: usize) -> Self {
        Self { zone, max_days }
    }

    #[must_use]
    pub fn zone(&self) -> ForecastZone {
        self.zone
    }

    #[must_use]
    pub fn max_days(&self) -> usize {
        self.max_days
    }

    /// Reduce `entries` to at most `max_days` daily forecasts.
    ///
    /// Every entry is checked before any grouping happens; a single malformed
    /// entry fails the whole call.
    pub fn aggregate(&self, entries: &[RawForecastEntry]) -> crate::Result<Vec<DailyForecast>> {
        let groups = self.group_by_day(entries)?;
        let total_days = groups.len();

        if total_days > self.max_days {
            warn!(
                "Forecast spans {} days, keeping the first {}",
                total_days, self.max_days
            );
        }

        let daily = groups
            .into_iter()
            .take(self.max_days)
            .map(|(date, samples)| {
                debug!("Aggregating {} samples for {}", samples.len(), date);
                reduce_day(&samples)
            })
            .collect();

        Ok(daily)
    }

    /// Group entries by local date, preserving first-encounter order of days
    /// and of entries within a day
    fn group_by_day<'a>(
        &self,
        entries: &'a [RawForecastEntry],
    ) -> crate::Result<Vec<(NaiveDate, Vec<&'a RawForecastEntry>)>> {
        let mut groups: Vec<(NaiveDate, Vec<&RawForecastEntry>)> = Vec::new();
        let mut index: HashMap<NaiveDate, usize> = HashMap::new();

        for entry in entries {
            entry.validate()?;
            let date = self.zone.local_date(entry.timestamp).ok_or_else(|| {
                RideCastError::validation(format!(
                    "forecast timestamp {} is out of range",
                    entry.timestamp
                ))
            })?;

            match index.get(&date) {
                Some(&slot) => groups[slot].1.push(entry),
                None => {
                    index.insert(date, groups.len());
                    groups.push((date, vec![entry]));
                }
            }
        }

        Ok(groups)
    }
}

/// Reduce one non-empty, validated group of samples
fn reduce_day(samples: &[&RawForecastEntry]) -> DailyForecast {
    let first = samples[0];
    let count = samples.len() as f64;

    let min = samples
        .iter()
        .map(|s| s.temp_min)
        .fold(f64::INFINITY, f64::min);
    let max = samples
        .iter()
        .map(|s| s.temp_max)
        .fold(f64::NEG_INFINITY, f64::max);

    let humidity_sum: u32 = samples.iter().map(|s| u32::from(s.humidity)).sum();
    // Mean of u8 values is at most 255
    let humidity = u8::try_from(humidity_sum / samples.len() as u32).unwrap_or(u8::MAX);

    let wind_speed = samples.iter().map(|s| s.wind_speed).sum::<f64>() / count;
    let precipitation_probability =
        samples.iter().map(|s| s.precipitation_probability).sum::<f64>() / count;

    let dominant = dominant_condition(samples)
        .or_else(|| first.weather_conditions.first())
        .cloned();

    DailyForecast {
        date: first.timestamp,
        temperature: Temperature {
            day: first.temp_current,
            min,
            max,
            night: first.temp_current,
        },
        weather_conditions: dominant.into_iter().collect(),
        humidity,
        wind_speed,
        precipitation_probability,
    }
}

/// Most frequent condition group across all conditions of all samples.
///
/// Returns the first condition seen for the winning group. Ties go to the
/// group that was encountered first.
fn dominant_condition<'a>(samples: &[&'a RawForecastEntry]) -> Option<&'a WeatherCondition> {
    // (main, occurrences, first condition with that main), in encounter order
    let mut tally: Vec<(&str, usize, &WeatherCondition)> = Vec::new();

    for condition in samples.iter().copied().flat_map(|s| s.weather_conditions.iter()) {
        match tally.iter_mut().find(|(main, _, _)| *main == condition.main) {
            Some((_, occurrences, _)) => *occurrences += 1,
            None => tally.push((condition.main.as_str(), 1, condition)),
        }
    }

    let mut best: Option<(usize, &WeatherCondition)> = None;
    for (_, occurrences, condition) in tally {
        if best.is_none_or(|(top, _)| occurrences > top) {
            best = Some((occurrences, condition));
        }
    }
    best.map(|(_, condition)| condition)
}
