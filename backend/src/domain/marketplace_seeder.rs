//! Hierarchical marketplace seeding orchestration.
//!
//! Creates customers first, then for every catalog location a provider, its
//! profile, the profile's listings, and each listing's availability slots.
//! Every create is awaited before the next one is issued and each returned
//! identifier is handed to the children created under it. The first failure
//! aborts the run; already created records are left in place.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone};
use mockable::Clock;
use seed_data::{
    AttributeRandomizer, CatalogLocation, FanOut, GenerationError, ReferenceCatalog, RngSeed,
    availability_slot_seed, customer_seed, listing_seed, profile_seed, provider_seed,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::ports::{MarketplaceSeedRepository, MarketplaceSeedRepositoryError};

/// Counts of what a seeding pass created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Seed the attribute randomizer was initialised with.
    pub rng_seed: RngSeed,
    /// Customer accounts created.
    pub customers: usize,
    /// Provider accounts created.
    pub providers: usize,
    /// Provider profiles created.
    pub profiles: usize,
    /// Listings created.
    pub listings: usize,
    /// Availability slots created.
    pub slots: usize,
}

impl SeedReport {
    fn empty(rng_seed: RngSeed) -> Self {
        Self {
            rng_seed,
            customers: 0,
            providers: 0,
            profiles: 0,
            listings: 0,
            slots: 0,
        }
    }

    /// Total number of create calls the pass issued.
    pub fn total_records(&self) -> usize {
        self.customers + self.providers + self.profiles + self.listings + self.slots
    }
}

/// Errors raised while seeding the marketplace.
#[derive(Debug, Error)]
pub enum MarketplaceSeedingError {
    /// An attribute could not be drawn.
    #[error("seed generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// Persistence adapter failed while seeding.
    #[error("marketplace persistence error: {0}")]
    Persistence(#[from] MarketplaceSeedRepositoryError),
}

/// Service that seeds the marketplace through a persistence gateway.
#[derive(Clone)]
pub struct MarketplaceSeeder<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    catalog: ReferenceCatalog<'static>,
    fan_out: FanOut,
    zone: Option<FixedOffset>,
}

impl<R> MarketplaceSeeder<R> {
    /// Create a seeder over the built-in catalog with the default fan-out.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            catalog: ReferenceCatalog::SYDNEY,
            fan_out: FanOut::default(),
            zone: None,
        }
    }

    /// Replace the reference catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: ReferenceCatalog<'static>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the number of children created per level.
    #[must_use]
    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// Read slot dates and hours at a fixed UTC offset instead of the
    /// clock's local zone.
    #[must_use]
    pub fn with_time_zone(mut self, zone: FixedOffset) -> Self {
        self.zone = Some(zone);
        self
    }
}

impl<R> MarketplaceSeeder<R>
where
    R: MarketplaceSeedRepository,
{
    /// Run one full seeding pass and then release the repository.
    ///
    /// Release happens whether or not seeding succeeded. A release failure
    /// after a successful pass is returned; after a failed pass it is logged
    /// and the seeding error is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceSeedingError`] if generation, any create, or the
    /// release fails.
    pub async fn seed_and_release(
        &self,
        rng_seed: RngSeed,
    ) -> Result<SeedReport, MarketplaceSeedingError> {
        let outcome = self.seed(rng_seed).await;
        let released = self.repository.release().await;

        match (outcome, released) {
            (Ok(report), Ok(())) => Ok(report),
            (Ok(_), Err(release_error)) => Err(release_error.into()),
            (Err(error), Ok(())) => Err(error),
            (Err(error), Err(release_error)) => {
                warn!(
                    error = %release_error,
                    "releasing the connection after a failed seeding pass also failed"
                );
                Err(error)
            }
        }
    }

    /// Run one full seeding pass without releasing the repository.
    ///
    /// Seeding is not idempotent: running it twice creates two independent
    /// sets of records.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceSeedingError`] on the first failed draw or create.
    pub async fn seed(&self, rng_seed: RngSeed) -> Result<SeedReport, MarketplaceSeedingError> {
        let now = self.clock.local();
        match self.zone {
            Some(zone) => self.seed_at(rng_seed, now.with_timezone(&zone)).await,
            None => self.seed_at(rng_seed, now).await,
        }
    }

    /// Slot dates and hours are drawn in the zone `now` carries.
    async fn seed_at<Tz>(
        &self,
        rng_seed: RngSeed,
        now: DateTime<Tz>,
    ) -> Result<SeedReport, MarketplaceSeedingError>
    where
        Tz: TimeZone + Send + Sync,
        Tz::Offset: Copy + fmt::Display + Send + Sync,
    {
        let mut randomizer = AttributeRandomizer::new(self.catalog, rng_seed);
        let mut report = SeedReport::empty(rng_seed);

        info!(rng_seed = %rng_seed, %now, "start seeding");

        for index in 0..self.fan_out.customers {
            self.repository.create_user(&customer_seed(index)).await?;
            report.customers += 1;
        }
        info!(customers = report.customers, "customers created");

        for location in self.catalog.locations() {
            self.seed_provider(&mut randomizer, location, now, &mut report)
                .await?;
        }
        info!(
            providers = report.providers,
            listings = report.listings,
            slots = report.slots,
            "providers, listings, and slots created"
        );

        info!(
            rng_seed = %rng_seed,
            records = report.total_records(),
            "seeding finished"
        );
        Ok(report)
    }

    async fn seed_provider<Tz>(
        &self,
        randomizer: &mut AttributeRandomizer<'static>,
        location: &CatalogLocation,
        now: DateTime<Tz>,
        report: &mut SeedReport,
    ) -> Result<(), MarketplaceSeedingError>
    where
        Tz: TimeZone + Send + Sync,
        Tz::Offset: Copy + Send + Sync,
    {
        let user_id = self
            .repository
            .create_user(&provider_seed(location))
            .await?;
        report.providers += 1;

        let profile = profile_seed(randomizer, location)?;
        let profile_id = self.repository.create_profile(user_id, &profile).await?;
        report.profiles += 1;
        debug!(location = location.name(), %user_id, %profile_id, "provider created");

        for _ in 0..self.fan_out.listings_per_profile {
            let listing = listing_seed(randomizer, location)?;
            let listing_id = self.repository.create_listing(profile_id, &listing).await?;
            report.listings += 1;

            for _ in 0..self.fan_out.slots_per_listing {
                let slot = availability_slot_seed(randomizer, now)?;
                self.repository
                    .create_availability_slot(listing_id, &slot)
                    .await?;
                report.slots += 1;
            }
        }

        Ok(())
    }
}
