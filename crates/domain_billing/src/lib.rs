//! Billing Domain - Synthetic Premium Payments
//!
//! This crate fabricates premium payment records for the policy simulation.
//! Nothing here moves money: each simulation tick, policies with a premium
//! due are collected, a plausible payment outcome is drawn for each, and the
//! policy's due date is advanced by one premium period.
//!
//! # Tick Flow
//!
//! ```text
//! policies + simulation date
//!     -> due-policy filter (Active, due date on or before the simulation date)
//!     -> payment synthesizer (amount, method, reference, status, period)
//!     -> policy advancer (last paid = simulation date, next due = period end)
//!     -> payments in filter order
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{GeneratorConfig, PremiumPaymentGenerator};
//!
//! let config = GeneratorConfig::from_env()?;
//! let mut generator = PremiumPaymentGenerator::from_config(&config)?;
//!
//! let payments = generator.generate_premium_payments(book.policies_mut(), today)?;
//! ```

pub mod payment;
pub mod reference;
pub mod distribution;
pub mod generator;
pub mod summary;
pub mod config;
pub mod rng;
pub mod error;

pub use payment::{PremiumPayment, PaymentStatus};
pub use reference::{PaymentReference, ReferenceGenerator, generate_payment_reference};
pub use distribution::{WeightedChoice, StatusWeights};
pub use generator::{PremiumPaymentGenerator, PolicySnapshot, TickOutcome, due_policy_indices};
pub use summary::TickSummary;
pub use crate::config::{GeneratorConfig, ReferenceConfig};
pub use error::BillingError;
