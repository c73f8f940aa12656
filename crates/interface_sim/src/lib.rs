//! Premium Payment Simulation
//!
//! Wires a seeded policy book to the premium payment generator and advances
//! the simulation one day per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_sim::{SimConfig, SimulationDriver};
//!
//! let config = SimConfig::from_env()?;
//! let mut driver = SimulationDriver::from_config(&config)?;
//!
//! for summary in driver.run(config.days)? {
//!     println!("{}", serde_json::to_string(&summary)?);
//! }
//! ```

pub mod config;
pub mod driver;
pub mod seed;
pub mod error;

pub use crate::config::SimConfig;
pub use driver::SimulationDriver;
pub use seed::seed_policy_book;
pub use error::SimError;
