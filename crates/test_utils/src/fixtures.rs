//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data that is consistent and predictable.

use chrono::NaiveDate;
use core_kernel::{Money, Currency};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard monthly premium (A$120.00)
    pub fn aud_monthly_premium() -> Money {
        Money::new(dec!(120.00), Currency::AUD)
    }

    /// Standard quarterly premium (A$345.60)
    pub fn aud_quarterly_premium() -> Money {
        Money::new(dec!(345.60), Currency::AUD)
    }

    /// Standard annual premium (A$1,380.00)
    pub fn aud_annual_premium() -> Money {
        Money::new(dec!(1380.00), Currency::AUD)
    }

    /// A premium in another currency for grouping tests
    pub fn nzd_monthly_premium() -> Money {
        Money::new(dec!(98.50), Currency::NZD)
    }
}

/// Fixture for simulation dates
pub struct DateFixtures;

impl DateFixtures {
    /// First day of the reference simulation (Jan 1, 2024)
    pub fn simulation_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// The day after the simulation start
    pub fn day_after_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    /// A date well before the simulation start, for overdue policies
    pub fn long_overdue() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
    }

    /// A date after the simulation start, for policies not yet due
    pub fn next_month() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    /// Builds a date, panicking on invalid input
    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
