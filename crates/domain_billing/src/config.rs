//! Generator configuration

use serde::{Deserialize, Serialize};

use core_kernel::Timezone;

use crate::distribution::StatusWeights;
use crate::error::BillingError;

/// Payment generator configuration
///
/// Every field has a default, so an empty source yields the standard
/// 95/3/2 outcome table, fixed-width references and an entropy-seeded RNG.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Outcome probability table
    pub status_weights: StatusWeights,
    /// Reference formatting
    pub reference: ReferenceConfig,
    /// Zone used to resolve today's date for undated references
    pub timezone: Timezone,
}

/// Reference formatting options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Pad references to the 19 character fixed-width column
    pub fixed_width: bool,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self { fixed_width: true }
    }
}

impl GeneratorConfig {
    /// Loads configuration from `PREMIUM_*` environment variables
    ///
    /// Nested keys use `__`, e.g. `PREMIUM_STATUS_WEIGHTS__FAILED=0.1`.
    pub fn from_env() -> Result<Self, BillingError> {
        Self::from_config(
            config::Config::builder()
                .add_source(Self::environment())
                .build()?,
        )
    }

    /// Deserializes and validates an already-built configuration
    pub fn from_config(source: config::Config) -> Result<Self, BillingError> {
        let parsed: Self = source.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// The environment source used by [`GeneratorConfig::from_env`]
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("PREMIUM")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Checks the outcome table can be sampled
    pub fn validate(&self) -> Result<(), BillingError> {
        self.status_weights.to_choice().map(|_| ())
    }
}
