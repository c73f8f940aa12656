//! Date handling types
//!
//! This module provides the date-level types the simulation works in:
//! - Coverage periods: the interval a premium payment pays for
//! - Timezones: the jurisdiction used to resolve "today"

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use std::str::FromStr;

use crate::error::CoreError;

/// Timezone wrapper for policy jurisdictions
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Parses an IANA zone name such as `Australia/Sydney`
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        Tz::from_str(name)
            .map(Timezone)
            .map_err(|_| CoreError::configuration(format!("Invalid timezone: {}", name)))
    }

    /// Returns the current wall-clock date in this timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Australia::Sydney)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Date out of range: {date} + {days} days")]
    OutOfRange {
        date: String,
        days: u64,
    },
}

/// The interval a premium payment covers
///
/// Start is inclusive, end is exclusive. The end of one period is the due
/// date of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CoveragePeriod {
    /// Creates a new coverage period
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start >= end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a period of a fixed number of days, calendar-naive
    pub fn of_days(start: NaiveDate, days: u64) -> Result<Self, TemporalError> {
        let end = start
            .checked_add_days(chrono::Days::new(days))
            .ok_or_else(|| TemporalError::OutOfRange {
                date: start.to_string(),
                days,
            })?;
        Self::new(start, end)
    }

    /// Returns the number of days covered
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Returns true if this period contains the given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}
