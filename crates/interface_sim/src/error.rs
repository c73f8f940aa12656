//! Simulation driver errors

use core_kernel::TemporalError;
use domain_billing::BillingError;
use domain_policy::PolicyError;
use thiserror::Error;

/// Errors raised while seeding or running a simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),

    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for SimError {
    fn from(err: config::ConfigError) -> Self {
        SimError::Configuration(err.to_string())
    }
}
