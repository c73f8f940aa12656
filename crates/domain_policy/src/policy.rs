//! Policy entity
//!
//! A [`Policy`] carries the premium-tracking state the simulation advances:
//! what is owed, how it is paid, how often, and when it is next due.
//!
//! # Invariants
//!
//! - Every policy has an identifier from the moment it is created
//! - An Active policy created through this API always has a due date
//! - Recording a payment moves the due date strictly forward

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, PolicyId};

use crate::error::PolicyError;
use crate::premium::PremiumFrequency;

/// Policy lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyStatus {
    /// Policy is in force and premiums are collected
    Active,
    /// Policy has lapsed, usually through non-payment
    Lapsed,
    /// Policy was cancelled and will not be reinstated
    Cancelled,
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::Lapsed => "Lapsed",
            PolicyStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// How the policyholder pays premiums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Direct debit from a bank account
    DirectDebit,
    /// Credit card
    CreditCard,
    /// Bank transfer
    BankTransfer,
    /// BPAY bill payment
    Bpay,
    /// Deduction from salary
    PayrollDeduction,
}

impl PaymentMethod {
    /// All payment methods
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::DirectDebit,
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::Bpay,
        PaymentMethod::PayrollDeduction,
    ];
}

/// An insurance policy as seen by premium collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    id: PolicyId,
    /// Lifecycle status
    pub status: PolicyStatus,
    /// Premium charged per period
    pub current_premium: Money,
    /// Payment method on file
    pub payment_method: PaymentMethod,
    /// How often the premium is due
    pub premium_frequency: PremiumFrequency,
    /// Date the next premium is owed
    pub next_premium_due_date: Option<NaiveDate>,
    /// Date the last premium was paid
    pub last_premium_paid_date: Option<NaiveDate>,
}

impl Policy {
    /// Creates an Active policy with its first premium due on `first_due_date`
    ///
    /// Identifiers normally come from a [`crate::PolicyBook`]; this constructor
    /// is for callers that already own an allocation scheme.
    pub fn new(
        id: PolicyId,
        current_premium: Money,
        payment_method: PaymentMethod,
        premium_frequency: PremiumFrequency,
        first_due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            status: PolicyStatus::Active,
            current_premium,
            payment_method,
            premium_frequency,
            next_premium_due_date: Some(first_due_date),
            last_premium_paid_date: None,
        }
    }

    /// Returns the policy identifier
    pub fn id(&self) -> PolicyId {
        self.id
    }

    /// Returns true if the policy is Active
    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }

    /// Returns true if a premium is owed on or before `date`
    pub fn is_premium_due(&self, date: NaiveDate) -> bool {
        self.is_active() && self.next_premium_due_date.is_some_and(|due| due <= date)
    }

    /// Records a premium paid on `paid_on` and moves the due date to `next_due`
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Validation`] if `next_due` does not move the
    /// current due date forward.
    pub fn record_premium_paid(
        &mut self,
        paid_on: NaiveDate,
        next_due: NaiveDate,
    ) -> Result<(), PolicyError> {
        if let Some(current) = self.next_premium_due_date {
            if next_due <= current {
                return Err(PolicyError::validation(format!(
                    "next due date {} must be after current due date {}",
                    next_due, current
                )));
            }
        }
        self.last_premium_paid_date = Some(paid_on);
        self.next_premium_due_date = Some(next_due);
        Ok(())
    }

    /// Checks the fields premium collection relies on
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.current_premium.is_positive() {
            return Err(PolicyError::validation(format!(
                "premium for {} must be positive, got {}",
                self.id, self.current_premium
            )));
        }
        if self.is_active() && self.next_premium_due_date.is_none() {
            return Err(PolicyError::MissingRequiredField(
                "next_premium_due_date".to_string(),
            ));
        }
        Ok(())
    }

    /// Lapses an Active policy
    pub fn lapse(&mut self) -> Result<(), PolicyError> {
        match self.status {
            PolicyStatus::Active => {
                self.status = PolicyStatus::Lapsed;
                Ok(())
            }
            from => Err(PolicyError::transition(from, PolicyStatus::Lapsed)),
        }
    }

    /// Cancels an Active or Lapsed policy
    pub fn cancel(&mut self) -> Result<(), PolicyError> {
        match self.status {
            PolicyStatus::Active | PolicyStatus::Lapsed => {
                self.status = PolicyStatus::Cancelled;
                self.next_premium_due_date = None;
                Ok(())
            }
            from => Err(PolicyError::transition(from, PolicyStatus::Cancelled)),
        }
    }

    /// Reinstates a Lapsed policy with a fresh due date
    pub fn reinstate(&mut self, next_due: NaiveDate) -> Result<(), PolicyError> {
        match self.status {
            PolicyStatus::Lapsed => {
                self.status = PolicyStatus::Active;
                self.next_premium_due_date = Some(next_due);
                Ok(())
            }
            from => Err(PolicyError::transition(from, PolicyStatus::Active)),
        }
    }
}
