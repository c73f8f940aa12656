//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::{Currency, Money, PolicyId};
use domain_policy::{PaymentMethod, Policy, PolicyStatus, PremiumFrequency};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating premium frequencies
pub fn frequency_strategy() -> impl Strategy<Value = PremiumFrequency> {
    prop_oneof![
        Just(PremiumFrequency::Monthly),
        Just(PremiumFrequency::Quarterly),
        Just(PremiumFrequency::Annually),
    ]
}

/// Strategy for generating payment methods
pub fn payment_method_strategy() -> impl Strategy<Value = PaymentMethod> {
    proptest::sample::select(PaymentMethod::ALL.to_vec())
}

/// Strategy for generating policy statuses, weighted towards Active
pub fn policy_status_strategy() -> impl Strategy<Value = PolicyStatus> {
    prop_oneof![
        6 => Just(PolicyStatus::Active),
        2 => Just(PolicyStatus::Lapsed),
        2 => Just(PolicyStatus::Cancelled),
    ]
}

/// Strategy for generating dates between 2000 and roughly 2054
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Strategy for generating positive AUD premiums between A$1.00 and A$10,000.00
pub fn aud_premium_strategy() -> impl Strategy<Value = Money> {
    (100i64..1_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2), Currency::AUD))
}

/// Strategy for generating a policy with the given identifier
///
/// Roughly one in ten Active policies has no due date.
pub fn policy_strategy(id: u64) -> impl Strategy<Value = Policy> {
    (
        policy_status_strategy(),
        aud_premium_strategy(),
        payment_method_strategy(),
        frequency_strategy(),
        proptest::option::weighted(0.9, date_strategy()),
    )
        .prop_map(move |(status, premium, method, frequency, due)| {
            let mut policy = Policy::new(
                PolicyId::from_raw(id),
                premium,
                method,
                frequency,
                NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            );
            policy.status = status;
            policy.next_premium_due_date = due;
            policy
        })
}

/// Strategy for generating up to `max` policies with identifiers 1..=n
pub fn policies_strategy(max: usize) -> impl Strategy<Value = Vec<Policy>> {
    (0..=max).prop_flat_map(|n| {
        (1..=n as u64)
            .map(policy_strategy)
            .collect::<Vec<_>>()
    })
}
