//! Policy book
//!
//! The book is an arena of policies. It allocates each policy's identifier
//! when the policy is issued, so identifiers are 1-based, dense and never
//! reused. Lookups by identifier are index operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{IdSequence, Money, PolicyId};

use crate::error::PolicyError;
use crate::policy::{PaymentMethod, Policy};
use crate::premium::PremiumFrequency;

/// Terms for a policy about to be issued
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPolicy {
    pub current_premium: Money,
    pub payment_method: PaymentMethod,
    pub premium_frequency: PremiumFrequency,
    pub first_due_date: NaiveDate,
}

/// Arena of policies owned by one simulation run
///
/// Serializes as the list of policies. Deserializing checks that the
/// policy at position `i` has identifier `i + 1`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Policy>", into = "Vec<Policy>")]
pub struct PolicyBook {
    ids: IdSequence,
    policies: Vec<Policy>,
}

impl PolicyBook {
    /// Creates an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new Active policy and returns its identifier
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Validation`] if the terms fail validation; no
    /// identifier is consumed in that case.
    pub fn issue(&mut self, terms: NewPolicy) -> Result<PolicyId, PolicyError> {
        let candidate = Policy::new(
            PolicyId::from_raw(self.ids.issued() + 1),
            terms.current_premium,
            terms.payment_method,
            terms.premium_frequency,
            terms.first_due_date,
        );
        candidate.validate()?;

        let id = PolicyId::from_raw(self.ids.next_raw());
        debug!(policy_id = %id, first_due = %terms.first_due_date, "Issued policy");
        self.policies.push(candidate);
        Ok(id)
    }

    /// Looks up a policy by identifier
    pub fn get(&self, id: PolicyId) -> Option<&Policy> {
        self.slot(id).and_then(|index| self.policies.get(index))
    }

    /// Looks up a policy by identifier for mutation
    pub fn get_mut(&mut self, id: PolicyId) -> Option<&mut Policy> {
        self.slot(id).and_then(move |index| self.policies.get_mut(index))
    }

    /// Returns every policy in issue order
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Exclusive access to every policy for the duration of one tick
    pub fn policies_mut(&mut self) -> &mut [Policy] {
        &mut self.policies
    }

    /// Iterates over policies in issue order
    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.policies.iter()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    fn slot(&self, id: PolicyId) -> Option<usize> {
        id.get().checked_sub(1).map(|index| index as usize)
    }
}

impl TryFrom<Vec<Policy>> for PolicyBook {
    type Error = PolicyError;

    fn try_from(policies: Vec<Policy>) -> Result<Self, Self::Error> {
        for (index, policy) in policies.iter().enumerate() {
            let expected = index as u64 + 1;
            if policy.id().get() != expected {
                return Err(PolicyError::validation(format!(
                    "policy at position {} has id {}, expected {}",
                    index,
                    policy.id(),
                    PolicyId::from_raw(expected)
                )));
            }
        }

        Ok(Self {
            ids: IdSequence::resume_after(policies.len() as u64),
            policies,
        })
    }
}

impl From<PolicyBook> for Vec<Policy> {
    fn from(book: PolicyBook) -> Self {
        book.policies
    }
}
