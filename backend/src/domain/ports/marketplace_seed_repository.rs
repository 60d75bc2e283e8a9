//! Port abstraction for persisting seeded marketplace entities.
//!
//! The seeder creates one record per call and threads each returned
//! identifier into the children it creates next. Adapters own exactly one
//! storage connection and give it up in [`MarketplaceSeedRepository::release`].

use async_trait::async_trait;
use seed_data::{AvailabilitySlotSeed, ListingSeed, ProfileSeed, UserSeed};

use crate::domain::{ListingId, ProfileId, SlotId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by marketplace seed repository adapters.
    pub enum MarketplaceSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "marketplace seeding connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "marketplace seeding query failed: {message}",
        /// The connection was already released.
        Released => "marketplace seeding connection already released",
    }
}

/// Port for creating marketplace entities one at a time.
///
/// Implementations must:
/// - Stamp each created record's modification time.
/// - Return the identifier storage assigned to the record.
/// - Treat `release` as idempotent and fail creates issued after it with
///   [`MarketplaceSeedRepositoryError::Released`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplaceSeedRepository: Send + Sync {
    /// Create a customer or provider account.
    async fn create_user(&self, user: &UserSeed) -> Result<UserId, MarketplaceSeedRepositoryError>;

    /// Create the profile owned by `user_id`.
    async fn create_profile(
        &self,
        user_id: UserId,
        profile: &ProfileSeed,
    ) -> Result<ProfileId, MarketplaceSeedRepositoryError>;

    /// Create a listing offered by `profile_id`.
    async fn create_listing(
        &self,
        profile_id: ProfileId,
        listing: &ListingSeed,
    ) -> Result<ListingId, MarketplaceSeedRepositoryError>;

    /// Create an availability slot for `listing_id`.
    async fn create_availability_slot(
        &self,
        listing_id: ListingId,
        slot: &AvailabilitySlotSeed,
    ) -> Result<SlotId, MarketplaceSeedRepositoryError>;

    /// Give up the storage connection. Calling it again is a no-op.
    async fn release(&self) -> Result<(), MarketplaceSeedRepositoryError>;
}
