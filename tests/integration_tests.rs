//! Integration tests for the RideCast library

use ridecast::{
    DailyAggregator, ForecastResponse, ForecastZone, RawForecastEntry, RideCastError,
    RidingForecastService, RidingRecommendation, RidingScoreEngine, WeatherCondition,
};
use std::collections::HashSet;

const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
// 2024-06-01 00:00:00 UTC
const JUNE_1: i64 = 1_717_200_000;

fn clear() -> WeatherCondition {
    WeatherCondition::new("Clear", "clear sky", "01d")
}

fn clouds() -> WeatherCondition {
    WeatherCondition::new("Clouds", "few clouds", "02d")
}

#[allow(clippy::too_many_arguments)]
fn entry(
    timestamp: i64,
    temp_min: f64,
    temp_max: f64,
    temp_current: f64,
    humidity: u8,
    wind_speed: f64,
    precipitation_probability: f64,
    condition: WeatherCondition,
) -> RawForecastEntry {
    RawForecastEntry {
        timestamp,
        temp_min,
        temp_max,
        temp_current,
        humidity,
        wind_speed,
        precipitation_probability,
        weather_conditions: vec![condition],
    }
}

/// 3-hour samples spread over `days` days, shuffled so input is not time-ordered
fn multi_day_forecast(days: i64) -> Vec<RawForecastEntry> {
    let mut entries = Vec::new();
    for step in 0..days * 8 {
        let temp = 10.0 + (step % 8) as f64;
        entries.push(entry(
            JUNE_1 + step * 3 * HOUR,
            temp - 1.0,
            temp + 1.0,
            temp,
            (40 + step % 50) as u8,
            (step % 7) as f64,
            (step % 10) as f64 / 10.0,
            if step % 3 == 0 { clouds() } else { clear() },
        ));
    }
    // deterministic interleave: odd indices first, then even
    let (odd, even): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 2 == 1);
    odd.into_iter().chain(even).map(|(_, e)| e).collect()
}

#[test]
fn test_example_scenario() {
    let entries = vec![
        entry(JUNE_1 + 9 * HOUR, 10.0, 18.0, 16.0, 40, 2.0, 0.0, clear()),
        entry(JUNE_1 + 12 * HOUR, 12.0, 20.0, 19.0, 60, 3.0, 0.1, clouds()),
        entry(JUNE_1 + 15 * HOUR, 9.0, 19.0, 18.0, 50, 1.0, 0.0, clear()),
    ];

    let days = DailyAggregator::default().aggregate(&entries).unwrap();
    assert_eq!(days.len(), 1);

    let day = &days[0];
    assert_eq!(day.date, JUNE_1 + 9 * HOUR);
    assert_eq!(day.temperature.min, 9.0);
    assert_eq!(day.temperature.max, 20.0);
    assert_eq!(day.temperature.day, 16.0);
    assert_eq!(day.temperature.night, 16.0);
    assert_eq!(day.humidity, 50);
    assert!((day.wind_speed - 2.0).abs() < 1e-9);
    assert!((day.precipitation_probability - 0.1 / 3.0).abs() < 1e-9);
    assert_eq!(day.weather_conditions.len(), 1);
    assert_eq!(day.weather_conditions[0].main, "Clear");

    let score = RidingScoreEngine::default().score(day);
    assert!(score.score >= 90, "score was {}", score.score);
    assert_eq!(score.recommendation, RidingRecommendation::Excellent);
    assert_eq!(score.factors.len(), 4);
    assert!(score.factors.iter().all(|f| !f.description.is_empty()));
}

#[test]
fn test_grouping_completeness() {
    let entries = multi_day_forecast(4);
    let zone = ForecastZone::default();
    let distinct: HashSet<_> = entries
        .iter()
        .map(|e| zone.local_date(e.timestamp).unwrap())
        .collect();

    let days = DailyAggregator::new(zone, 100).aggregate(&entries).unwrap();
    assert_eq!(days.len(), distinct.len());

    // one output day per distinct input date, none invented or merged
    let dates: HashSet<_> = days
        .iter()
        .map(|d| zone.local_date(d.date).unwrap())
        .collect();
    assert_eq!(dates, distinct);
}

#[test]
fn test_cap_invariant() {
    for days in [0, 1, 5, 6, 7, 10] {
        let entries = multi_day_forecast(days);
        let result = DailyAggregator::default().aggregate(&entries).unwrap();
        assert_eq!(result.len(), (days as usize).min(6), "for {days} days");
    }
}

#[test]
fn test_min_max_correctness() {
    let entries = multi_day_forecast(3);
    let zone = ForecastZone::default();
    let days = DailyAggregator::default().aggregate(&entries).unwrap();

    for day in &days {
        let date = zone.local_date(day.date).unwrap();
        let members: Vec<&RawForecastEntry> = entries
            .iter()
            .filter(|e| zone.local_date(e.timestamp) == Some(date))
            .collect();

        let true_min = members.iter().map(|e| e.temp_min).fold(f64::INFINITY, f64::min);
        let true_max = members
            .iter()
            .map(|e| e.temp_max)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(day.temperature.min, true_min);
        assert_eq!(day.temperature.max, true_max);
    }
}

#[test]
fn test_score_bounds_and_monotonic_tiers() {
    let engine = RidingScoreEngine::default();
    let service = RidingForecastService::default();
    let mut scored = Vec::new();

    for temp in [-15.0, 0.0, 8.0, 18.0, 30.0, 42.0] {
        for wind in [0.0, 5.0, 11.0, 25.0] {
            for rain in [0.0, 0.5, 1.0] {
                for main in ["Clear", "Rain", "Snow", "Thunderstorm", "Whatever"] {
                    let entries = vec![entry(
                        JUNE_1,
                        temp - 3.0,
                        temp + 3.0,
                        temp,
                        70,
                        wind,
                        rain,
                        WeatherCondition::new(main, "", "01d"),
                    )];
                    let day = &service.daily_scores(&entries).unwrap()[0];
                    assert!(day.score.score <= 100);
                    assert_eq!(engine.score(&day.forecast), day.score);
                    scored.push((day.score.score, day.score.recommendation));
                }
            }
        }
    }

    scored.sort();
    for pair in scored.windows(2) {
        assert!(pair[0].1 <= pair[1].1, "{:?} then {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_empty_input_produces_no_scores() {
    let results = RidingForecastService::default().daily_scores(&[]).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_invalid_entry_is_rejected() {
    let mut bad = entry(JUNE_1, 10.0, 18.0, 16.0, 40, 2.0, 0.0, clear());
    bad.weather_conditions.clear();

    let err = RidingForecastService::default()
        .daily_scores(&[bad])
        .unwrap_err();
    assert!(matches!(err, RideCastError::Validation { .. }));
}

#[test]
fn test_openweather_payload_end_to_end() {
    let payload = serde_json::json!({
        "cod": "200",
        "cnt": 3,
        "list": [
            {
                "dt": JUNE_1 + 6 * HOUR,
                "main": {"temp": 17.0, "temp_min": 15.0, "temp_max": 18.0, "humidity": 55},
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
                "wind": {"speed": 2.2},
                "pop": 0.0
            },
            {
                "dt": JUNE_1 + 9 * HOUR,
                "main": {"temp": 21.0, "temp_min": 19.0, "temp_max": 22.0, "humidity": 45},
                "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}],
                "wind": {"speed": 3.1},
                "pop": 0.05
            },
            {
                "dt": JUNE_1 + DAY + 6 * HOUR,
                "main": {"temp": 9.0, "temp_min": 8.0, "temp_max": 11.0, "humidity": 90},
                "weather": [{"id": 502, "main": "Rain", "description": "heavy intensity rain", "icon": "10d"}],
                "wind": {"speed": 11.5},
                "pop": 1.0
            }
        ],
        "city": {"name": "Utrecht", "timezone": 7200}
    })
    .to_string();

    let response = ForecastResponse::from_json(&payload).unwrap();
    let zone = response.city_zone().unwrap().unwrap();
    let service = RidingForecastService::new(
        DailyAggregator::new(zone, 6),
        RidingScoreEngine::default(),
    );

    let results = service.daily_scores_from_response(&response).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].forecast.weather_conditions[0].main, "Clear");
    assert!(results[0].score.recommendation >= RidingRecommendation::Good);
    assert!(results[1].score.recommendation <= RidingRecommendation::Poor);

    let best = RidingForecastService::best_day(&results).unwrap();
    assert_eq!(best.forecast.date, JUNE_1 + 6 * HOUR);
    assert_eq!(service.format_date(best.forecast.date).as_deref(), Some("Sat, Jun 1"));

    // results serialize for downstream consumers
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[1]["score"]["factors"].as_array().unwrap().len(), 4);
}

#[test]
fn test_concurrent_scoring() {
    let service = RidingForecastService::default();
    let entries = multi_day_forecast(6);
    let expected = service.daily_scores(&entries).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| service.daily_scores(&entries).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
