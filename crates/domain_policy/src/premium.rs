//! Premium frequencies and due-date arithmetic
//!
//! Due dates move by a fixed number of days per frequency. The arithmetic is
//! deliberately calendar-naive: a Monthly premium due on 31 January is next
//! due on 2 March in a leap year, not on the last day of February.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::CoveragePeriod;

use crate::error::PolicyError;

/// Premium payment frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PremiumFrequency {
    /// Monthly premium, 30 days per period
    Monthly,
    /// Quarterly premium, 90 days per period
    Quarterly,
    /// Annual premium, 365 days per period
    Annually,
}

impl PremiumFrequency {
    /// All frequencies, in increasing period length
    pub const ALL: [PremiumFrequency; 3] = [
        PremiumFrequency::Monthly,
        PremiumFrequency::Quarterly,
        PremiumFrequency::Annually,
    ];

    /// Returns the fixed length of one premium period in days
    pub fn period_days(&self) -> u64 {
        match self {
            PremiumFrequency::Monthly => 30,
            PremiumFrequency::Quarterly => 90,
            PremiumFrequency::Annually => 365,
        }
    }

    /// Returns the coverage period paid for by a premium due on `start`
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Temporal`] if the end date is not representable.
    pub fn coverage_period(&self, start: NaiveDate) -> Result<CoveragePeriod, PolicyError> {
        Ok(CoveragePeriod::of_days(start, self.period_days())?)
    }

    /// Calculates the next due date after a premium due on `from_date` is paid
    pub fn next_due_date(&self, from_date: NaiveDate) -> Result<NaiveDate, PolicyError> {
        Ok(self.coverage_period(from_date)?.end)
    }
}
