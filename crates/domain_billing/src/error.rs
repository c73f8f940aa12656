//! Billing domain errors

use chrono::NaiveDate;
use core_kernel::{CoreError, MoneyError};
use domain_policy::PolicyError;
use thiserror::Error;

/// Errors that can occur while generating premium payments
#[derive(Debug, Error)]
pub enum BillingError {
    /// A policy could not be advanced
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Kernel-level failure (timezones, periods)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Money arithmetic failed while summarising a tick
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Outcome weight table is unusable
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Date cannot be encoded in a `PMT-YYYYMMDD-NNNNN` reference
    #[error("Date {0} cannot be encoded in a payment reference")]
    UnsupportedDate(NaiveDate),

    /// Payment reference string is malformed
    #[error("Invalid payment reference: {0}")]
    InvalidReference(String),

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BillingError {
    /// Creates an invalid weights error
    pub fn invalid_weights(message: impl Into<String>) -> Self {
        BillingError::InvalidWeights(message.into())
    }
}

impl From<config::ConfigError> for BillingError {
    fn from(err: config::ConfigError) -> Self {
        BillingError::Configuration(err.to_string())
    }
}
