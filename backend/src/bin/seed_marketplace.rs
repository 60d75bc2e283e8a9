//! Populate the marketplace database with a reproducible demo data set.
//!
//! Reads `MARKETPLACE_SEED_DATABASE_URL` (or `DATABASE_URL`) and the optional
//! `MARKETPLACE_SEED_RNG_SEED` from the environment.
//!
//! # Examples
//! ```sh
//! MARKETPLACE_SEED_RNG_SEED=42 cargo run --manifest-path backend/Cargo.toml --bin seed-marketplace
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::process::ExitCode;

use color_eyre::eyre::{Result, WrapErr};
use marketplace_backend::seeding::{SeederSettings, seed_marketplace};
use tokio::runtime::Builder;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(err) = color_eyre::install() {
        eprintln!("failed to install error reporter: {err}");
    }
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            error!(error = ?report, "seeding failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing init failed: {err}");
    }
}

fn run() -> Result<()> {
    let settings = SeederSettings::from_env().wrap_err("load seeder settings")?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;

    let report = runtime
        .block_on(seed_marketplace(&settings))
        .wrap_err("seed marketplace")?;

    info!(
        rng_seed = %report.rng_seed,
        customers = report.customers,
        providers = report.providers,
        profiles = report.profiles,
        listings = report.listings,
        slots = report.slots,
        total = report.total_records(),
        "seeding completed"
    );
    Ok(())
}
