//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_policy::Policy;

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {}",
        money
    );
}

/// Asserts that a policy was advanced by a payment on `simulation_date`
///
/// # Panics
///
/// Panics if the last paid date is not the simulation date or the next due
/// date is not `expected_next_due`
pub fn assert_policy_advanced(policy: &Policy, simulation_date: NaiveDate, expected_next_due: NaiveDate) {
    assert_eq!(
        policy.last_premium_paid_date,
        Some(simulation_date),
        "{} last paid date should be the simulation date",
        policy.id()
    );
    assert_eq!(
        policy.next_premium_due_date,
        Some(expected_next_due),
        "{} next due date should be the period end",
        policy.id()
    );
}

/// Asserts that a policy's payment-tracking fields match an earlier copy
pub fn assert_policy_untouched(policy: &Policy, before: &Policy) {
    assert_eq!(
        policy, before,
        "{} should not have been modified",
        policy.id()
    );
}
