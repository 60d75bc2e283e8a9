//! Confirm that the configured Supabase project is reachable.
//!
//! Reads `NEXT_PUBLIC_SUPABASE_URL` and `NEXT_PUBLIC_SUPABASE_ANON_KEY`, sends
//! one read against the `User` table, and exits 0 when the database answered
//! (including when the table has not been created yet).
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::process::ExitCode;

use color_eyre::eyre::{Result, WrapErr};
use marketplace_backend::domain::ProbeOutcome;
use marketplace_backend::probe::{ProbeSettings, run_connectivity_probe};
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
            error!(error = ?report, "database connectivity check failed");
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
    let settings = ProbeSettings::from_env().wrap_err("load Supabase settings")?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;

    match runtime.block_on(run_connectivity_probe(&settings))? {
        ProbeOutcome::SchemaAbsent { message } => {
            info!(%message, "database reachable; schema not yet created");
        }
        ProbeOutcome::Connected { rows } => {
            let rows = serde_json::to_string(&rows).wrap_err("render probe rows")?;
            info!(%rows, "database reachable");
        }
    }
    Ok(())
}
