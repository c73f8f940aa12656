//! Payment reference generation
//!
//! References have the shape `PMT-YYYYMMDD-NNNNN`: the payment date followed
//! by five independently drawn digits. Downstream consumers store references
//! in a fixed-width 19 character column, so by default the 18 character
//! reference is right-padded with a single space. References are not unique;
//! two payments on the same date collide with probability 1 in 100 000.
//!
//! Only dates in years 0000 to 9999 fit the eight digit date segment; other
//! dates are rejected rather than widening the reference.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Timezone;

use crate::error::BillingError;

/// Literal prefix of every reference
pub const REFERENCE_PREFIX: &str = "PMT";

/// Number of random digits in the numeric segment
pub const REFERENCE_DIGITS: usize = 5;

/// Width of the fixed-width reference column
pub const REFERENCE_WIDTH: usize = 19;

const DATE_FORMAT: &str = "%Y%m%d";
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;
const DATE_RANGE: std::ops::Range<usize> = 4..12;
const NUMBER_RANGE: std::ops::Range<usize> = 13..18;

/// A formatted payment reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentReference(String);

impl PaymentReference {
    /// Parses and checks a reference string, padded or not
    pub fn parse(value: impl Into<String>) -> Result<Self, BillingError> {
        let value = value.into();
        let core = value.trim_end_matches(' ');
        let invalid = || BillingError::InvalidReference(value.clone());

        if core.len() != NUMBER_RANGE.end || value.len() > REFERENCE_WIDTH {
            return Err(invalid());
        }
        let mut parts = core.split('-');
        let (Some(prefix), Some(date), Some(number), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if prefix != REFERENCE_PREFIX
            || !date.bytes().all(|b| b.is_ascii_digit())
            || NaiveDate::parse_from_str(date, DATE_FORMAT).is_err()
            || number.len() != REFERENCE_DIGITS
            || !number.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        Ok(Self(value))
    }

    /// Returns the reference exactly as stored, including any padding
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `YYYYMMDD` segment
    pub fn date_segment(&self) -> &str {
        &self.0[DATE_RANGE]
    }

    /// The five digit segment
    pub fn number_segment(&self) -> &str {
        &self.0[NUMBER_RANGE]
    }

    /// The payment date encoded in the reference
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_segment(), DATE_FORMAT).ok()
    }

    /// True if the reference carries the fixed-width padding
    pub fn is_fixed_width(&self) -> bool {
        self.0.len() == REFERENCE_WIDTH
    }
}

impl fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds payment references
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceGenerator {
    fixed_width: bool,
    timezone: Timezone,
}

impl Default for ReferenceGenerator {
    fn default() -> Self {
        Self {
            fixed_width: true,
            timezone: Timezone::default(),
        }
    }
}

impl ReferenceGenerator {
    /// Creates a generator
    ///
    /// * `fixed_width` - pad references to [`REFERENCE_WIDTH`]
    /// * `timezone` - zone used to resolve today's date when none is given
    pub fn new(fixed_width: bool, timezone: Timezone) -> Self {
        Self { fixed_width, timezone }
    }

    /// Generates a reference for `payment_date`, or for today when `None`
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnsupportedDate`] if the year is outside
    /// 0000 to 9999. No random digits are drawn in that case.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        payment_date: Option<NaiveDate>,
    ) -> Result<PaymentReference, BillingError> {
        let date = payment_date.unwrap_or_else(|| self.timezone.today());
        if !YEAR_RANGE.contains(&date.year()) {
            return Err(BillingError::UnsupportedDate(date));
        }
        let number: String = (0..REFERENCE_DIGITS)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();

        let reference = format!("{}-{}-{}", REFERENCE_PREFIX, date.format(DATE_FORMAT), number);
        Ok(if self.fixed_width {
            PaymentReference(format!("{:<width$}", reference, width = REFERENCE_WIDTH))
        } else {
            PaymentReference(reference)
        })
    }
}

/// Generates a fixed-width reference using the thread-local RNG
pub fn generate_payment_reference(
    payment_date: Option<NaiveDate>,
) -> Result<PaymentReference, BillingError> {
    ReferenceGenerator::default().generate(&mut rand::thread_rng(), payment_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_reference_shape() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let reference = ReferenceGenerator::default().generate(&mut rng, Some(date)).unwrap();

        assert_eq!(reference.as_str().len(), REFERENCE_WIDTH);
        assert!(reference.as_str().starts_with("PMT-20240309-"));
        assert!(reference.as_str().ends_with(' '));
        assert_eq!(reference.date(), Some(date));
    }

    #[test]
    fn test_unpadded_reference() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let reference = ReferenceGenerator::new(false, Timezone::default())
            .generate(&mut rng, Some(date)).unwrap();

        assert_eq!(reference.as_str().len(), 18);
        assert!(!reference.is_fixed_width());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(PaymentReference::parse("PMT-20240101-12345 ").is_ok());
        assert!(PaymentReference::parse("PMT-20240101-12345").is_ok());
        assert!(PaymentReference::parse("PAY-20240101-12345 ").is_err());
        assert!(PaymentReference::parse("PMT-20241301-12345 ").is_err());
        assert!(PaymentReference::parse("PMT-20240101-1234a ").is_err());
        assert!(PaymentReference::parse("PMT-20240101-12345  ").is_err());
        assert!(PaymentReference::parse("PMT-+2024011-12345").is_err());
    }

    #[test]
    fn test_rejects_years_beyond_four_digits() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let generator = ReferenceGenerator::default();
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        let beyond = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        let before = NaiveDate::from_ymd_opt(-1, 12, 31).unwrap();

        let reference = generator.generate(&mut rng, Some(last)).unwrap();
        assert_eq!(reference.as_str(), format!("PMT-99991231-{} ", reference.number_segment()));
        assert_eq!(reference.date(), Some(last));

        assert!(matches!(
            generator.generate(&mut rng, Some(beyond)),
            Err(BillingError::UnsupportedDate(date)) if date == beyond
        ));
        assert!(matches!(
            generator.generate(&mut rng, Some(before)),
            Err(BillingError::UnsupportedDate(_))
        ));
    }
}
