//! UTC calendar instant with sub-second precision.
//!
//! `UtcInstant` is the civil date-time accepted by the natal calculator.
//! The caller guarantees UTC; no timezone or leap-second table is applied,
//! and the resulting Julian Date is used directly as the time argument of
//! the solar and lunar series.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jd_to_calendar};

const MILLIS_PER_DAY: u64 = 86_400_000;

/// UTC calendar date-time with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcInstant {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that every field names a real calendar moment.
    ///
    /// `second` may reach 60.x to carry a leap second.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidInstant(format!(
                "month {} not in 1..=12",
                self.month
            )));
        }
        let max_day = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidInstant(format!(
                "day {} not in 1..={max_day} for {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidInstant(format!(
                "hour {} not in 0..=23",
                self.hour
            )));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidInstant(format!(
                "minute {} not in 0..=59",
                self.minute
            )));
        }
        if !self.second.is_finite() || !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidInstant(format!(
                "second {} not in [0, 61)",
                self.second
            )));
        }
        Ok(())
    }

    /// Fractional day of month: `day + hour/24 + minute/1440 + second/86400`.
    pub fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
    }

    /// Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }

    /// Rebuild a calendar instant from a Julian Date.
    ///
    /// The time of day is rounded to the millisecond; near the present a
    /// Julian Date in `f64` resolves only about 40 µs.
    pub fn from_jd(jd: f64) -> Self {
        let (mut year, mut month, day_frac) = jd_to_calendar(jd);
        let mut day = day_frac.floor() as u32;
        let mut millis = (day_frac.fract() * MILLIS_PER_DAY as f64).round() as u64;
        if millis >= MILLIS_PER_DAY {
            millis -= MILLIS_PER_DAY;
            day += 1;
            if day > days_in_month(year, month) {
                day = 1;
                month += 1;
                if month > 12 {
                    month = 1;
                    year += 1;
                }
            }
        }
        Self {
            year,
            month,
            day,
            hour: (millis / 3_600_000) as u32,
            minute: (millis % 3_600_000 / 60_000) as u32,
            second: (millis % 60_000) as f64 / 1000.0,
        }
    }

    /// Convert to a `chrono` UTC date-time (nanosecond resolution).
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimeError> {
        self.validate()?;
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        // chrono encodes a leap second as second 59 with nanos >= 1e9
        let (sec, nanos) = if whole >= 60.0 {
            (59, nanos + 1_000_000_000)
        } else {
            (whole as u32, nanos)
        };
        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_nano_opt(self.hour, self.minute, sec, nanos))
            .ok_or_else(|| TimeError::InvalidInstant(self.to_string()))?;
        Ok(Utc.from_utc_datetime(&naive))
    }
}

impl From<DateTime<Utc>> for UtcInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }
}

impl FromStr for UtcInstant {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[.fff]Z` (any RFC 3339 offset is converted
    /// to UTC). A string without an offset is taken as UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Self::from(Utc.from_utc_datetime(&naive)))
            .map_err(|e| TimeError::Parse(format!("{s:?}: {e}")))
    }
}

impl Display for UtcInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:",
            self.year, self.month, self.day, self.hour, self.minute
        )?;
        let mut micros = (self.second * 1e6).round() as u64;
        // Rounding must not turn 59.9999999 into a leap second.
        if self.second < 60.0 {
            micros = micros.min(59_999_999);
        }
        let (whole, frac) = (micros / 1_000_000, micros % 1_000_000);
        if frac == 0 {
            write!(f, "{whole:02}Z")
        } else {
            write!(f, "{whole:02}.{frac:06}Z")
        }
    }
}
