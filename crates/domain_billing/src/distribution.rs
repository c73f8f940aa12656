//! Weighted categorical sampling
//!
//! Payment outcomes are drawn from an explicit probability table so that the
//! table can be tested on its own and swapped through configuration.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BillingError;
use crate::payment::PaymentStatus;

/// A categorical distribution over a fixed set of outcomes
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    outcomes: Vec<T>,
    weights: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl<T: Clone> WeightedChoice<T> {
    /// Builds a distribution from `(outcome, weight)` pairs
    ///
    /// Weights are relative and need not sum to one.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::InvalidWeights`] if the table is empty, any
    /// weight is negative or not finite, or every weight is zero.
    pub fn new(table: impl IntoIterator<Item = (T, f64)>) -> Result<Self, BillingError> {
        let (outcomes, weights): (Vec<T>, Vec<f64>) = table.into_iter().unzip();

        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(BillingError::invalid_weights(format!(
                "weight {} is not a finite non-negative number",
                bad
            )));
        }
        let index = WeightedIndex::new(&weights)
            .map_err(|e| BillingError::invalid_weights(e.to_string()))?;

        Ok(Self {
            outcomes,
            weights,
            index,
        })
    }

    /// Draws one outcome
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.outcomes[self.index.sample(rng)].clone()
    }

    /// Normalised probability of each outcome, in table order
    pub fn probabilities(&self) -> Vec<(T, f64)> {
        let total: f64 = self.weights.iter().sum();
        self.outcomes
            .iter()
            .cloned()
            .zip(self.weights.iter().map(|w| w / total))
            .collect()
    }
}

/// Probability table for payment outcomes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusWeights {
    pub successful: f64,
    pub failed: f64,
    pub pending: f64,
}

impl Default for StatusWeights {
    fn default() -> Self {
        Self {
            successful: 0.95,
            failed: 0.03,
            pending: 0.02,
        }
    }
}

impl StatusWeights {
    /// Builds the sampler for this table
    pub fn to_choice(&self) -> Result<WeightedChoice<PaymentStatus>, BillingError> {
        WeightedChoice::new([
            (PaymentStatus::Successful, self.successful),
            (PaymentStatus::Failed, self.failed),
            (PaymentStatus::Pending, self.pending),
        ])
    }
}
