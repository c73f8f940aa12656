//! Per-tick reporting

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{Currency, Money};

use crate::error::BillingError;
use crate::payment::{PaymentStatus, PremiumPayment};

/// What one generation pass produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSummary {
    pub simulation_date: NaiveDate,
    /// Policies that passed the due filter
    pub due_count: usize,
    /// Payment records created
    pub payment_count: usize,
    pub successful: usize,
    pub failed: usize,
    pub pending: usize,
    /// Sum of successful payments, per currency
    pub collected: BTreeMap<Currency, Money>,
}

impl TickSummary {
    /// Summarises the payments generated on `simulation_date`
    pub fn from_payments<'a>(
        simulation_date: NaiveDate,
        due_count: usize,
        payments: impl IntoIterator<Item = &'a PremiumPayment>,
    ) -> Result<Self, BillingError> {
        let mut summary = Self {
            simulation_date,
            due_count,
            payment_count: 0,
            successful: 0,
            failed: 0,
            pending: 0,
            collected: BTreeMap::new(),
        };

        for payment in payments {
            summary.payment_count += 1;
            match payment.payment_status() {
                PaymentStatus::Successful => summary.successful += 1,
                PaymentStatus::Failed => summary.failed += 1,
                PaymentStatus::Pending => summary.pending += 1,
            }
            if payment.is_successful() {
                let amount = payment.payment_amount();
                let total = summary
                    .collected
                    .entry(amount.currency())
                    .or_insert_with(|| Money::zero(amount.currency()));
                *total = total.checked_add(&amount)?;
            }
        }

        Ok(summary)
    }

    /// Total collected in `currency`, zero if nothing was collected
    pub fn collected_in(&self, currency: Currency) -> Money {
        self.collected
            .get(&currency)
            .copied()
            .unwrap_or_else(|| Money::zero(currency))
    }
}
