//! Random policy book seeding

use chrono::{Days, NaiveDate};
use rand::Rng;

use core_kernel::{Currency, Money, TemporalError};
use domain_policy::{NewPolicy, PaymentMethod, PolicyBook, PremiumFrequency};

use crate::error::SimError;

/// Monthly-equivalent premium range in cents
const MONTHLY_PREMIUM_CENTS: std::ops::RangeInclusive<i64> = 40_00..=450_00;

fn months_per_period(frequency: PremiumFrequency) -> i64 {
    match frequency {
        PremiumFrequency::Monthly => 1,
        PremiumFrequency::Quarterly => 3,
        PremiumFrequency::Annually => 12,
    }
}

/// Issues `count` Active AUD policies
///
/// Each policy gets a random method and frequency, a premium scaled to its
/// frequency, and a first due date within one period of `start_date`.
pub fn seed_policy_book<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    start_date: NaiveDate,
) -> Result<PolicyBook, SimError> {
    let mut book = PolicyBook::new();

    for _ in 0..count {
        let frequency = PremiumFrequency::ALL[rng.gen_range(0..PremiumFrequency::ALL.len())];
        let payment_method = PaymentMethod::ALL[rng.gen_range(0..PaymentMethod::ALL.len())];
        let monthly_cents = rng.gen_range(MONTHLY_PREMIUM_CENTS);
        let offset = rng.gen_range(0..frequency.period_days());

        let first_due_date = start_date
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| TemporalError::OutOfRange {
                date: start_date.to_string(),
                days: offset,
            })?;

        book.issue(NewPolicy {
            current_premium: Money::from_minor(
                monthly_cents * months_per_period(frequency),
                Currency::AUD,
            ),
            payment_method,
            premium_frequency: frequency,
            first_due_date,
        })?;
    }

    Ok(book)
}
