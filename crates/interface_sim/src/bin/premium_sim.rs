//! Premium Payment Simulation Binary
//!
//! Seeds a policy book, runs the payment generator once per simulated day and
//! writes each tick's summary to stdout as one JSON line.
//!
//! # Usage
//!
//! ```bash
//! SIM_START_DATE=2024-01-01 SIM_DAYS=90 PREMIUM_SEED=7 cargo run --bin premium-sim
//! ```
//!
//! # Environment Variables
//!
//! * `SIM_START_DATE` - First simulated day (default: today in the generator timezone)
//! * `SIM_DAYS` - Number of days to simulate (default: 30)
//! * `SIM_POLICIES` - Size of the seeded policy book (default: 100)
//! * `SIM_BOOK_SEED` - Seed for the policy book
//! * `SIM_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `PREMIUM_SEED` - Seed for payment references and outcomes
//! * `PREMIUM_STATUS_WEIGHTS__SUCCESSFUL` and friends - Outcome weights
//! * `PREMIUM_REFERENCE__FIXED_WIDTH` - Pad references to 19 characters (default: true)
//! * `PREMIUM_TIMEZONE` - IANA zone for "today" (default: Australia/Sydney)

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use interface_sim::{SimConfig, SimulationDriver};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = SimConfig::from_env().context("loading simulation configuration")?;
    init_tracing(&config.log_level);

    tracing::info!(
        days = config.days,
        policies = config.policies,
        "Starting premium payment simulation"
    );

    let mut driver = SimulationDriver::from_config(&config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for _ in 0..config.days {
        let outcome = driver.step()?;
        serde_json::to_writer(&mut out, &outcome.summary)?;
        writeln!(out)?;
    }
    out.flush()?;

    tracing::info!(end_date = %driver.current_date(), "Simulation complete");
    Ok(())
}

/// Initializes the tracing subscriber, logging to stderr
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
