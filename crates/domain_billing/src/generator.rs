//! Premium payment generator
//!
//! One call processes one simulation tick:
//!
//! 1. **Filter** - Active policies whose due date is on or before the
//!    simulation date, in input order. Overdue policies are included.
//! 2. **Synthesize** - one payment per due policy. The amount and method are
//!    copied from the policy, the reference is dated with the simulation
//!    date, the status is drawn from the outcome table, and the period runs
//!    from the policy's due date for one premium period.
//! 3. **Advance** - each processed policy records the simulation date as
//!    last paid and the period end as next due.
//!
//! Every payment is synthesized, and for [`PremiumPaymentGenerator::run_tick`]
//! totalled, before any policy is advanced, so an error part way through
//! leaves all policies as they were. An overdue policy moves
//! forward one period per tick; no proration is applied.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::PolicyId;
use domain_policy::{Policy, PolicyError, PolicyStatus};

use crate::config::GeneratorConfig;
use crate::distribution::WeightedChoice;
use crate::error::BillingError;
use crate::payment::{PaymentStatus, PremiumPayment};
use crate::reference::{PaymentReference, ReferenceGenerator};
use crate::rng::{payment_rng, PaymentRng};
use crate::summary::TickSummary;

/// Returns the positions of policies with a premium due on `simulation_date`
pub fn due_policy_indices(policies: &[Policy], simulation_date: NaiveDate) -> Vec<usize> {
    policies
        .iter()
        .enumerate()
        .filter(|(_, policy)| policy.is_premium_due(simulation_date))
        .map(|(index, _)| index)
        .collect()
}

/// Payment-tracking state of a policy after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySnapshot {
    pub policy_id: PolicyId,
    pub status: PolicyStatus,
    pub next_premium_due_date: Option<NaiveDate>,
    pub last_premium_paid_date: Option<NaiveDate>,
}

impl From<&Policy> for PolicySnapshot {
    fn from(policy: &Policy) -> Self {
        Self {
            policy_id: policy.id(),
            status: policy.status,
            next_premium_due_date: policy.next_premium_due_date,
            last_premium_paid_date: policy.last_premium_paid_date,
        }
    }
}

/// Everything one tick produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    /// Payments in filter order
    pub payments: Vec<PremiumPayment>,
    /// Advanced policies, in the same order as `payments`
    pub snapshots: Vec<PolicySnapshot>,
    pub summary: TickSummary,
}

/// Synthesizes premium payments and advances the policies that paid
#[derive(Debug)]
pub struct PremiumPaymentGenerator<R = PaymentRng> {
    rng: R,
    references: ReferenceGenerator,
    outcomes: WeightedChoice<PaymentStatus>,
}

impl PremiumPaymentGenerator<PaymentRng> {
    /// Builds a generator from configuration
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, BillingError> {
        Ok(Self::new(
            payment_rng(config.seed),
            ReferenceGenerator::new(config.reference.fixed_width, config.timezone),
            config.status_weights.to_choice()?,
        ))
    }

    /// Builds a generator with default settings and a fixed seed
    pub fn seeded(seed: u64) -> Result<Self, BillingError> {
        Self::from_config(&GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
    }
}

impl<R: Rng> PremiumPaymentGenerator<R> {
    /// Creates a generator from its parts
    pub fn new(
        rng: R,
        references: ReferenceGenerator,
        outcomes: WeightedChoice<PaymentStatus>,
    ) -> Self {
        Self {
            rng,
            references,
            outcomes,
        }
    }

    /// Generates a reference for `payment_date`, or for today when `None`
    pub fn generate_payment_reference(
        &mut self,
        payment_date: Option<NaiveDate>,
    ) -> Result<PaymentReference, BillingError> {
        self.references.generate(&mut self.rng, payment_date)
    }

    /// Generates payments for every policy due on `simulation_date`
    ///
    /// Policies that produced a payment are advanced in place. Returns the
    /// payments in the order the policies appear in `policies`.
    ///
    /// # Errors
    ///
    /// Returns an error if a period end date is not representable or the
    /// simulation date cannot be encoded in a reference. No policy is
    /// modified in that case.
    pub fn generate_premium_payments(
        &mut self,
        policies: &mut [Policy],
        simulation_date: NaiveDate,
    ) -> Result<Vec<PremiumPayment>, BillingError> {
        let pending = self.synthesize_due(policies, simulation_date)?;
        Self::advance(policies, &pending, simulation_date)?;
        Ok(pending.into_iter().map(|(_, payment)| payment).collect())
    }

    /// Runs one tick, also returning snapshots of advanced policies and a summary
    ///
    /// The summary is computed before any policy is advanced, so a failure
    /// to total the tick leaves every policy untouched.
    pub fn run_tick(
        &mut self,
        policies: &mut [Policy],
        simulation_date: NaiveDate,
    ) -> Result<TickOutcome, BillingError> {
        let pending = self.synthesize_due(policies, simulation_date)?;
        let summary = TickSummary::from_payments(
            simulation_date,
            pending.len(),
            pending.iter().map(|(_, payment)| payment),
        )?;
        Self::advance(policies, &pending, simulation_date)?;

        let snapshots = pending
            .iter()
            .map(|(index, _)| PolicySnapshot::from(&policies[*index]))
            .collect();
        let payments = pending.into_iter().map(|(_, payment)| payment).collect();

        Ok(TickOutcome {
            payments,
            snapshots,
            summary,
        })
    }

    /// Filters and synthesizes without touching any policy
    fn synthesize_due(
        &mut self,
        policies: &[Policy],
        simulation_date: NaiveDate,
    ) -> Result<Vec<(usize, PremiumPayment)>, BillingError> {
        let due = due_policy_indices(policies, simulation_date);
        info!(
            due_count = due.len(),
            simulation_date = %simulation_date,
            "Found policies with premiums due on or before simulation date"
        );

        let mut pending = Vec::with_capacity(due.len());
        for index in due {
            let payment = self.synthesize(&policies[index], simulation_date)?;
            pending.push((index, payment));
        }
        Ok(pending)
    }

    fn advance(
        policies: &mut [Policy],
        pending: &[(usize, PremiumPayment)],
        simulation_date: NaiveDate,
    ) -> Result<(), BillingError> {
        for (index, payment) in pending {
            policies[*index].record_premium_paid(simulation_date, payment.period_end_date())?;
        }

        info!(
            payment_count = pending.len(),
            simulation_date = %simulation_date,
            "Generated premium payments"
        );
        Ok(())
    }

    fn synthesize(
        &mut self,
        policy: &Policy,
        simulation_date: NaiveDate,
    ) -> Result<PremiumPayment, BillingError> {
        let due_date = policy.next_premium_due_date.ok_or_else(|| {
            PolicyError::MissingRequiredField("next_premium_due_date".to_string())
        })?;
        let period = policy.premium_frequency.coverage_period(due_date)?;

        let reference = self.references.generate(&mut self.rng, Some(simulation_date))?;
        let status = self.outcomes.sample(&mut self.rng);

        debug!(
            policy_id = %policy.id(),
            reference = %reference,
            status = %status,
            period_start = %period.start,
            period_end = %period.end,
            "Synthesized premium payment"
        );

        Ok(PremiumPayment::new(
            policy.id(),
            simulation_date,
            policy.current_premium,
            policy.payment_method,
            reference,
            status,
            period,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, Money};
    use domain_policy::{PaymentMethod, PremiumFrequency};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy(id: u64, due: NaiveDate) -> Policy {
        Policy::new(
            PolicyId::from_raw(id),
            Money::new(dec!(120.00), Currency::AUD),
            PaymentMethod::DirectDebit,
            PremiumFrequency::Monthly,
            due,
        )
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let policies = vec![
            policy(3, date(2024, 1, 1)),
            policy(1, date(2024, 2, 1)),
            policy(2, date(2023, 12, 1)),
        ];

        assert_eq!(due_policy_indices(&policies, date(2024, 1, 1)), vec![0, 2]);
    }

    #[test]
    fn test_period_overflow_leaves_every_policy_untouched() {
        let mut policies = vec![policy(2, NaiveDate::MAX), policy(1, date(2024, 1, 1))];
        let before = policies.clone();
        let mut generator = PremiumPaymentGenerator::seeded(5).unwrap();

        let result = generator.generate_premium_payments(&mut policies, NaiveDate::MAX);

        assert!(matches!(result, Err(BillingError::Policy(PolicyError::Temporal(_)))));
        assert_eq!(policies, before);
    }

    #[test]
    fn test_unencodable_date_leaves_every_policy_untouched() {
        let mut policies = vec![policy(1, date(2024, 1, 1)), policy(2, date(9999, 12, 31))];
        let before = policies.clone();
        let mut generator = PremiumPaymentGenerator::seeded(5).unwrap();

        let result = generator.run_tick(&mut policies, date(10000, 1, 1));

        assert!(matches!(result, Err(BillingError::UnsupportedDate(_))));
        assert_eq!(policies, before);
    }

    #[test]
    fn test_summary_overflow_leaves_every_policy_untouched() {
        let half = rust_decimal::Decimal::MAX / dec!(2) + dec!(1);
        let mut policies: Vec<Policy> = (1..=2)
            .map(|id| {
                let mut p = policy(id, date(2024, 1, 1));
                p.current_premium = Money::new(half, Currency::AUD);
                p
            })
            .collect();
        let before = policies.clone();
        let mut generator = PremiumPaymentGenerator::new(
            payment_rng(Some(5)),
            ReferenceGenerator::default(),
            WeightedChoice::new([(PaymentStatus::Successful, 1.0)]).unwrap(),
        );

        let result = generator.run_tick(&mut policies, date(2024, 1, 1));

        assert!(matches!(
            result,
            Err(BillingError::Money(core_kernel::MoneyError::Overflow(_)))
        ));
        assert_eq!(policies, before);
    }

    #[test]
    fn test_snapshots_follow_payments() {
        let mut policies = vec![policy(1, date(2024, 1, 1)), policy(2, date(2024, 1, 1))];
        let mut generator = PremiumPaymentGenerator::seeded(5).unwrap();

        let outcome = generator.run_tick(&mut policies, date(2024, 1, 1)).unwrap();

        assert_eq!(outcome.snapshots.len(), 2);
        for (payment, snapshot) in outcome.payments.iter().zip(&outcome.snapshots) {
            assert_eq!(payment.policy_id(), snapshot.policy_id);
            assert_eq!(snapshot.next_premium_due_date, Some(payment.period_end_date()));
        }
    }
}
