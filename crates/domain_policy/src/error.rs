//! Policy domain errors

use core_kernel::TemporalError;
use thiserror::Error;

use crate::policy::PolicyStatus;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Invalid state transition attempted
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        from: PolicyStatus,
        to: PolicyStatus,
    },

    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Date arithmetic left the representable calendar
    #[error("Date error: {0}")]
    Temporal(#[from] TemporalError),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl PolicyError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PolicyError::Validation(message.into())
    }

    pub(crate) fn transition(from: PolicyStatus, to: PolicyStatus) -> Self {
        PolicyError::InvalidStateTransition { from, to }
    }
}
