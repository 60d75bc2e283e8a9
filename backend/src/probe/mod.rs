//! Configuration and wiring for the database connectivity probe.

mod config;
mod run;

pub use config::{ProbeConfigError, ProbeCredentials, ProbeSettings};
pub use run::{ProbeRunError, run_connectivity_probe};
