//! Seeding pass wiring for the `seed-marketplace` binary.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use thiserror::Error;
use tracing::info;

use crate::domain::{MarketplaceSeeder, MarketplaceSeedingError, SeedReport};
use crate::outbound::persistence::{DbPool, DieselMarketplaceSeedRepository, PoolConfig, PoolError};
use crate::seeding::config::{SeederConfigError, SeederSettings};

/// Errors returned while running a seeding pass.
#[derive(Debug, Error)]
pub enum SeedingRunError {
    /// Configuration was missing or invalid.
    #[error("seeder configuration error: {0}")]
    Config(#[from] SeederConfigError),
    /// The connection pool could not be created.
    #[error("database pool error: {0}")]
    Pool(#[from] PoolError),
    /// Seed generation or persistence failed.
    #[error("marketplace seeding error: {0}")]
    Seeding(#[from] MarketplaceSeedingError),
}

/// Connect to the configured database and run one seeding pass.
///
/// The connection is released before this returns, whatever the outcome.
///
/// # Examples
///
/// ```rust,no_run
/// use marketplace_backend::seeding::{SeederSettings, seed_marketplace};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = SeederSettings {
///     database_url: Some("postgres://localhost/marketplace".to_owned()),
///     rng_seed: Some(42),
/// };
/// let report = seed_marketplace(&settings).await?;
/// assert_eq!(report.customers, 5);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`SeedingRunError`] if configuration is incomplete, the pool
/// cannot be built, or seeding fails.
pub async fn seed_marketplace(settings: &SeederSettings) -> Result<SeedReport, SeedingRunError> {
    let database_url = settings.database_url()?;
    let rng_seed = settings.rng_seed();
    info!(
        rng_seed = %rng_seed,
        replay = format!("MARKETPLACE_SEED_RNG_SEED={rng_seed}"),
        "seeding marketplace"
    );

    let pool = DbPool::new(PoolConfig::new(database_url)).await?;
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let repository = DieselMarketplaceSeedRepository::new(pool, Arc::clone(&clock));
    let seeder = MarketplaceSeeder::new(Arc::new(repository), clock);

    Ok(seeder.seed_and_release(rng_seed).await?)
}
