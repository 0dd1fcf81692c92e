//! Time zone used to decide calendar-day boundaries

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::RideCastError;

/// Zone in which forecast timestamps are turned into calendar dates.
///
/// Grouping and date formatting must use the same zone, otherwise the
/// day boundaries seen by the two disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ForecastZone {
    /// IANA zone such as `Europe/Berlin`
    Named(Tz),
    /// Fixed UTC offset, e.g. from a provider's `city.timezone`
    Offset(FixedOffset),
}

impl Default for ForecastZone {
    fn default() -> Self {
        ForecastZone::Named(Tz::UTC)
    }
}

impl ForecastZone {
    /// Build a fixed-offset zone from seconds east of UTC
    pub fn from_offset_seconds(seconds: i32) -> crate::Result<Self> {
        FixedOffset::east_opt(seconds)
            .map(ForecastZone::Offset)
            .ok_or_else(|| {
                RideCastError::validation(format!("UTC offset out of range: {seconds}s"))
            })
    }

    /// Local calendar date of an epoch timestamp.
    ///
    /// `None` when the timestamp, or its local time in this zone, lies
    /// outside chrono's representable range.
    #[must_use]
    pub fn local_date(&self, timestamp: i64) -> Option<NaiveDate> {
        self.local_time(timestamp).map(|local| local.date())
    }

    /// Format an epoch timestamp with a chrono format string in this zone
    #[must_use]
    pub fn format(&self, timestamp: i64, pattern: &str) -> Option<String> {
        let utc = DateTime::<Utc>::from_timestamp(timestamp, 0)?;
        self.local_time(timestamp)?;
        Some(match self {
            ForecastZone::Named(tz) => utc.with_timezone(tz).format(pattern).to_string(),
            ForecastZone::Offset(offset) => utc.with_timezone(offset).format(pattern).to_string(),
        })
    }

    fn local_time(&self, timestamp: i64) -> Option<NaiveDateTime> {
        let naive = DateTime::<Utc>::from_timestamp(timestamp, 0)?.naive_utc();
        let offset = match self {
            ForecastZone::Named(tz) => tz.offset_from_utc_datetime(&naive).fix(),
            ForecastZone::Offset(offset) => *offset,
        };
        naive.checked_add_offset(offset)
    }
}

impl FromStr for ForecastZone {
    type Err = RideCastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('+') || s.starts_with('-') {
            return FixedOffset::from_str(s)
                .map(ForecastZone::Offset)
                .map_err(|e| RideCastError::validation(format!("Invalid UTC offset '{s}': {e}")));
        }

        s.parse::<Tz>()
            .map(ForecastZone::Named)
            .map_err(|_| RideCastError::validation(format!("Unknown time zone '{s}'")))
    }
}

impl TryFrom<String> for ForecastZone {
    type Error = RideCastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ForecastZone> for String {
    fn from(zone: ForecastZone) -> Self {
        zone.to_string()
    }
}

impl fmt::Display for ForecastZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastZone::Named(tz) => write!(f, "{}", tz.name()),
            ForecastZone::Offset(offset) => write!(f, "{offset}"),
        }
    }
}
