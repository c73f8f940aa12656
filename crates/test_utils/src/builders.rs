//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{Money, PolicyId};
use domain_policy::{
    NewPolicy, PaymentMethod, Policy, PolicyBook, PolicyStatus, PremiumFrequency,
};

use crate::fixtures::{DateFixtures, MoneyFixtures};

/// Builder for constructing test policies
pub struct TestPolicyBuilder {
    id: PolicyId,
    status: PolicyStatus,
    premium: Money,
    payment_method: PaymentMethod,
    frequency: PremiumFrequency,
    next_due: Option<NaiveDate>,
    last_paid: Option<NaiveDate>,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a builder for an Active monthly A$120.00 direct debit policy
    /// due on the simulation start date
    pub fn new() -> Self {
        Self {
            id: PolicyId::from_raw(1),
            status: PolicyStatus::Active,
            premium: MoneyFixtures::aud_monthly_premium(),
            payment_method: PaymentMethod::DirectDebit,
            frequency: PremiumFrequency::Monthly,
            next_due: Some(DateFixtures::simulation_start()),
            last_paid: None,
        }
    }

    /// Sets the policy ID
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = PolicyId::from_raw(id);
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the premium
    pub fn with_premium(mut self, premium: Money) -> Self {
        self.premium = premium;
        self
    }

    /// Sets the payment method
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Sets the premium frequency
    pub fn with_frequency(mut self, frequency: PremiumFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the next due date
    pub fn due_on(mut self, date: NaiveDate) -> Self {
        self.next_due = Some(date);
        self
    }

    /// Clears the next due date
    pub fn without_due_date(mut self) -> Self {
        self.next_due = None;
        self
    }

    /// Sets the last paid date
    pub fn last_paid_on(mut self, date: NaiveDate) -> Self {
        self.last_paid = Some(date);
        self
    }

    /// Builds the policy
    pub fn build(self) -> Policy {
        let mut policy = Policy::new(
            self.id,
            self.premium,
            self.payment_method,
            self.frequency,
            DateFixtures::simulation_start(),
        );
        policy.status = self.status;
        policy.next_premium_due_date = self.next_due;
        policy.last_premium_paid_date = self.last_paid;
        policy
    }
}

/// Builder for a policy book issued from a list of terms
#[derive(Default)]
pub struct TestPolicyBookBuilder {
    terms: Vec<NewPolicy>,
}

impl TestPolicyBookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a direct debit A$120.00 policy with the given frequency and first due date
    pub fn with_policy(mut self, frequency: PremiumFrequency, first_due: NaiveDate) -> Self {
        self.terms.push(NewPolicy {
            current_premium: MoneyFixtures::aud_monthly_premium(),
            payment_method: PaymentMethod::DirectDebit,
            premium_frequency: frequency,
            first_due_date: first_due,
        });
        self
    }

    /// Adds a policy with explicit terms
    pub fn with_terms(mut self, terms: NewPolicy) -> Self {
        self.terms.push(terms);
        self
    }

    /// Issues every policy into a new book
    pub fn build(self) -> PolicyBook {
        let mut book = PolicyBook::new();
        for terms in self.terms {
            book.issue(terms).expect("test policy terms should be valid");
        }
        book
    }
}
