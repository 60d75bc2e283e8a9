//! Configuration and wiring for marketplace seeding.

mod config;
mod startup;

pub use config::{SeederConfigError, SeederSettings};
pub use startup::{SeedingRunError, seed_marketplace};
