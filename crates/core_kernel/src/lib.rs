//! Core Kernel - Foundational types for the premium simulation
//!
//! This crate provides the building blocks shared by the policy and billing domains:
//! - Money types with precise decimal arithmetic
//! - Coverage periods and jurisdiction timezones
//! - Strongly-typed identifiers allocated at creation time

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{CoveragePeriod, Timezone, TemporalError};
pub use identifiers::{PolicyId, IdSequence};
pub use error::CoreError;
