//! PostgreSQL-backed marketplace seeding adapter.
//!
//! This adapter implements the `MarketplaceSeedRepository` port with one
//! `INSERT .. RETURNING id` per call. It owns the pool for the lifetime of a
//! seeding pass; `release` drops it, which closes the connection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;
use seed_data::{AvailabilitySlotSeed, ListingLocation, ListingSeed, ProfileSeed, UserSeed};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::ports::{MarketplaceSeedRepository, MarketplaceSeedRepositoryError};
use crate::domain::{ListingId, ProfileId, SlotId, UserId};

use super::models::{NewAvailabilitySlotRow, NewListingRow, NewProfileRow, NewUserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{availability_slots, listings, profiles, users};

/// Diesel-backed implementation of the marketplace seeding repository.
pub struct DieselMarketplaceSeedRepository {
    pool: Mutex<Option<DbPool>>,
    clock: Arc<dyn Clock>,
}

impl DieselMarketplaceSeedRepository {
    /// Create a repository that owns `pool` until released.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    ///
    /// use marketplace_backend::outbound::persistence::{
    ///     DbPool, DieselMarketplaceSeedRepository, PoolConfig,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/marketplace")).await?;
    /// let repository = DieselMarketplaceSeedRepository::new(pool, Arc::new(DefaultClock));
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self {
            pool: Mutex::new(Some(pool)),
            clock,
        }
    }

    fn lock_pool(&self) -> MutexGuard<'_, Option<DbPool>> {
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn pool(&self) -> Result<DbPool, MarketplaceSeedRepositoryError> {
        self.lock_pool()
            .clone()
            .ok_or_else(MarketplaceSeedRepositoryError::released)
    }
}

/// Map pool errors to domain persistence errors.
fn map_pool_error(error: PoolError) -> MarketplaceSeedRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            MarketplaceSeedRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> MarketplaceSeedRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                error = %error_message,
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => MarketplaceSeedRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            MarketplaceSeedRepositoryError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => {
            MarketplaceSeedRepositoryError::query(info.message().to_owned())
        }
        _ => MarketplaceSeedRepositoryError::query(error_message),
    }
}

fn location_json(
    location: &ListingLocation,
) -> Result<serde_json::Value, MarketplaceSeedRepositoryError> {
    serde_json::to_value(location).map_err(|err| {
        MarketplaceSeedRepositoryError::query(format!("listing location is not valid JSON: {err}"))
    })
}

#[async_trait]
impl MarketplaceSeedRepository for DieselMarketplaceSeedRepository {
    async fn create_user(&self, user: &UserSeed) -> Result<UserId, MarketplaceSeedRepositoryError> {
        let pool = self.pool()?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            id: Uuid::new_v4(),
            email: &user.email,
            role: user.role.as_str(),
            updated_at: self.clock.utc(),
        };

        let id = diesel::insert_into(users::table)
            .values(&row)
            .returning(users::id)
            .get_result::<Uuid>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(UserId::from_uuid(id))
    }

    async fn create_profile(
        &self,
        user_id: UserId,
        profile: &ProfileSeed,
    ) -> Result<ProfileId, MarketplaceSeedRepositoryError> {
        let pool = self.pool()?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;
        let row = NewProfileRow {
            id: Uuid::new_v4(),
            user_id: *user_id.as_uuid(),
            display_name: &profile.display_name,
            bio: &profile.bio,
            gst: profile.gst,
            updated_at: self.clock.utc(),
        };

        let id = diesel::insert_into(profiles::table)
            .values(&row)
            .returning(profiles::id)
            .get_result::<Uuid>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(ProfileId::from_uuid(id))
    }

    async fn create_listing(
        &self,
        profile_id: ProfileId,
        listing: &ListingSeed,
    ) -> Result<ListingId, MarketplaceSeedRepositoryError> {
        let pool = self.pool()?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;
        let row = NewListingRow {
            id: Uuid::new_v4(),
            provider_id: *profile_id.as_uuid(),
            title: &listing.title,
            category: &listing.category,
            description: &listing.description,
            price_per_hour: listing.price_per_hour,
            location: location_json(&listing.location)?,
            updated_at: self.clock.utc(),
        };

        let id = diesel::insert_into(listings::table)
            .values(&row)
            .returning(listings::id)
            .get_result::<Uuid>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(ListingId::from_uuid(id))
    }

    async fn create_availability_slot(
        &self,
        listing_id: ListingId,
        slot: &AvailabilitySlotSeed,
    ) -> Result<SlotId, MarketplaceSeedRepositoryError> {
        let pool = self.pool()?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;
        let row = NewAvailabilitySlotRow {
            id: Uuid::new_v4(),
            listing_id: *listing_id.as_uuid(),
            starts_at: slot.starts_at,
            ends_at: slot.ends_at,
            updated_at: self.clock.utc(),
        };

        let id = diesel::insert_into(availability_slots::table)
            .values(&row)
            .returning(availability_slots::id)
            .get_result::<Uuid>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(SlotId::from_uuid(id))
    }

    async fn release(&self) -> Result<(), MarketplaceSeedRepositoryError> {
        if self.lock_pool().take().is_some() {
            info!("database connection released");
        }
        Ok(())
    }
}
