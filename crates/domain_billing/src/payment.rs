//! Premium payment records
//!
//! A [`PremiumPayment`] is created once per due policy per tick and never
//! changes afterwards; its fields are only readable through accessors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{CoveragePeriod, Money, PolicyId};
use domain_policy::PaymentMethod;

use crate::reference::PaymentReference;

/// Outcome of a synthetic premium payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Funds were collected
    Successful,
    /// Collection was attempted and declined
    Failed,
    /// Collection is still in flight
    Pending,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentStatus::Successful => "Successful",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Pending => "Pending",
        };
        f.write_str(name)
    }
}

/// A synthetic premium payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumPayment {
    policy_id: PolicyId,
    payment_date: NaiveDate,
    payment_amount: Money,
    payment_method: PaymentMethod,
    payment_reference: PaymentReference,
    payment_status: PaymentStatus,
    period_start_date: NaiveDate,
    period_end_date: NaiveDate,
}

impl PremiumPayment {
    /// Creates a payment record covering `period`
    pub fn new(
        policy_id: PolicyId,
        payment_date: NaiveDate,
        payment_amount: Money,
        payment_method: PaymentMethod,
        payment_reference: PaymentReference,
        payment_status: PaymentStatus,
        period: CoveragePeriod,
    ) -> Self {
        Self {
            policy_id,
            payment_date,
            payment_amount,
            payment_method,
            payment_reference,
            payment_status,
            period_start_date: period.start,
            period_end_date: period.end,
        }
    }

    pub fn policy_id(&self) -> PolicyId {
        self.policy_id
    }

    pub fn payment_date(&self) -> NaiveDate {
        self.payment_date
    }

    pub fn payment_amount(&self) -> Money {
        self.payment_amount
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn payment_reference(&self) -> &PaymentReference {
        &self.payment_reference
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn period_start_date(&self) -> NaiveDate {
        self.period_start_date
    }

    pub fn period_end_date(&self) -> NaiveDate {
        self.period_end_date
    }

    /// Returns the coverage interval this payment pays for
    pub fn coverage_period(&self) -> CoveragePeriod {
        CoveragePeriod {
            start: self.period_start_date,
            end: self.period_end_date,
        }
    }

    /// Returns true if funds were collected
    pub fn is_successful(&self) -> bool {
        self.payment_status == PaymentStatus::Successful
    }
}
