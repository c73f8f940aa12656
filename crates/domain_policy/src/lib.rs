//! Policy Domain
//!
//! This crate holds the policy-side state the premium simulation reads and
//! advances each tick.
//!
//! # Policy Lifecycle
//!
//! ```text
//! Active -> Lapsed -> Active (reinstated)
//!        \-> Cancelled
//! ```
//!
//! Only Active policies with a due date on or before the simulation date are
//! picked up for premium collection.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{PolicyBook, NewPolicy, PremiumFrequency, PaymentMethod};
//!
//! let mut book = PolicyBook::new();
//! let id = book.issue(NewPolicy {
//!     current_premium: Money::new(dec!(120), Currency::AUD),
//!     payment_method: PaymentMethod::DirectDebit,
//!     premium_frequency: PremiumFrequency::Monthly,
//!     first_due_date: start_date,
//! })?;
//! ```

pub mod policy;
pub mod premium;
pub mod book;
pub mod error;

pub use policy::{Policy, PolicyStatus, PaymentMethod};
pub use premium::PremiumFrequency;
pub use book::{PolicyBook, NewPolicy};
pub use error::PolicyError;
