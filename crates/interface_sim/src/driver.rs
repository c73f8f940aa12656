//! Day-by-day simulation driver

use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::info;

use core_kernel::TemporalError;
use domain_billing::rng::{payment_rng, PaymentRng};
use domain_billing::{PremiumPaymentGenerator, TickOutcome, TickSummary};
use domain_policy::PolicyBook;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::seed::seed_policy_book;

/// Runs the payment generator over a policy book, one day per tick
///
/// The driver owns the book for the whole run, so no other code can touch
/// the policies while a tick is in progress.
#[derive(Debug)]
pub struct SimulationDriver<R = PaymentRng> {
    book: PolicyBook,
    generator: PremiumPaymentGenerator<R>,
    current_date: NaiveDate,
}

impl SimulationDriver<PaymentRng> {
    /// Seeds a book and builds a generator from configuration
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        let start_date = config.resolved_start_date();
        let book = seed_policy_book(&mut payment_rng(config.book_seed), config.policies, start_date)?;
        let generator = PremiumPaymentGenerator::from_config(&config.generator)?;

        info!(
            policies = book.len(),
            start_date = %start_date,
            "Seeded policy book"
        );
        Ok(Self::new(book, generator, start_date))
    }
}

impl<R: Rng> SimulationDriver<R> {
    pub fn new(book: PolicyBook, generator: PremiumPaymentGenerator<R>, start_date: NaiveDate) -> Self {
        Self {
            book,
            generator,
            current_date: start_date,
        }
    }

    /// The date the next tick will simulate
    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn book(&self) -> &PolicyBook {
        &self.book
    }

    /// Runs one tick on the current date, then moves to the next day
    pub fn step(&mut self) -> Result<TickOutcome, SimError> {
        let outcome = self
            .generator
            .run_tick(self.book.policies_mut(), self.current_date)?;
        self.current_date = self
            .current_date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| TemporalError::OutOfRange {
                date: self.current_date.to_string(),
                days: 1,
            })?;
        Ok(outcome)
    }

    /// Runs `days` ticks and returns their summaries
    pub fn run(&mut self, days: u32) -> Result<Vec<TickSummary>, SimError> {
        (0..days)
            .map(|_| self.step().map(|outcome| outcome.summary))
            .collect()
    }
}
