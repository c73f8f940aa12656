//! Simulation configuration

use chrono::NaiveDate;
use serde::Deserialize;

use domain_billing::GeneratorConfig;

use crate::error::SimError;

/// Simulation run configuration
///
/// Run settings come from `SIM_*` variables. Generator settings are loaded
/// separately from `PREMIUM_*` variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// First simulated day; today in the generator's timezone when unset
    pub start_date: Option<NaiveDate>,
    /// Number of ticks to run
    pub days: u32,
    /// Number of policies in the seeded book
    pub policies: usize,
    /// Seed for the policy book; entropy when unset
    pub book_seed: Option<u64>,
    /// Log level
    pub log_level: String,
    /// Payment generator settings
    #[serde(skip)]
    pub generator: GeneratorConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_date: None,
            days: 30,
            policies: 100,
            book_seed: None,
            log_level: "info".to_string(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl SimConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, SimError> {
        let source = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("SIM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(Self::from_config(source)?.with_generator(GeneratorConfig::from_env()?))
    }

    /// Deserializes the run settings from an already-built configuration
    pub fn from_config(source: config::Config) -> Result<Self, SimError> {
        Ok(source.try_deserialize()?)
    }

    /// Replaces the generator settings
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Resolves the first simulated day
    pub fn resolved_start_date(&self) -> NaiveDate {
        self.start_date
            .unwrap_or_else(|| self.generator.timezone.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn load(json: &str) -> Result<SimConfig, SimError> {
        SimConfig::from_config(
            config::Config::builder()
                .add_source(File::from_str(json, FileFormat::Json))
                .build()?,
        )
    }

    #[test]
    fn test_defaults() {
        let config = load("{}").unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.days, 30);
        assert_eq!(config.policies, 100);
    }

    #[test]
    fn test_start_date_override() {
        let config = load(r#"{"start_date": "2024-01-01", "days": 7}"#).unwrap();

        assert_eq!(config.resolved_start_date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(config.days, 7);
    }

    #[test]
    fn test_bad_date_is_configuration_error() {
        let result = load(r#"{"start_date": "2024-13-01"}"#);
        assert!(matches!(result, Err(SimError::Configuration(_))));
    }
}
