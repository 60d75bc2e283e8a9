//! In-memory seed repository that records every create call.
//!
//! Identifiers are random UUIDs, as the Diesel adapter assigns them. Each
//! record also carries a global sequence number so that tests can check the
//! order in which parents and children were created.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use seed_data::{AvailabilitySlotSeed, ListingSeed, ProfileSeed, UserSeed};

use crate::domain::ports::{MarketplaceSeedRepository, MarketplaceSeedRepositoryError};
use crate::domain::{ListingId, ProfileId, SlotId, UserId};

/// A recorded user create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUser {
    /// Position among all successful creates.
    pub sequence: usize,
    /// Assigned identifier.
    pub id: UserId,
    /// Attributes passed to the create.
    pub seed: UserSeed,
}

/// A recorded profile create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedProfile {
    /// Position among all successful creates.
    pub sequence: usize,
    /// Assigned identifier.
    pub id: ProfileId,
    /// Owning user.
    pub user_id: UserId,
    /// Attributes passed to the create.
    pub seed: ProfileSeed,
}

/// A recorded listing create.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedListing {
    /// Position among all successful creates.
    pub sequence: usize,
    /// Assigned identifier.
    pub id: ListingId,
    /// Offering profile.
    pub profile_id: ProfileId,
    /// Attributes passed to the create.
    pub seed: ListingSeed,
}

/// A recorded availability slot create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSlot {
    /// Position among all successful creates.
    pub sequence: usize,
    /// Assigned identifier.
    pub id: SlotId,
    /// Parent listing.
    pub listing_id: ListingId,
    /// Attributes passed to the create.
    pub seed: AvailabilitySlotSeed,
}

/// Everything a [`RecordingSeedRepository`] has seen so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedEntities {
    /// Created users in call order.
    pub users: Vec<RecordedUser>,
    /// Created profiles in call order.
    pub profiles: Vec<RecordedProfile>,
    /// Created listings in call order.
    pub listings: Vec<RecordedListing>,
    /// Created slots in call order.
    pub slots: Vec<RecordedSlot>,
    /// Number of `release` calls.
    pub release_calls: usize,
}

impl RecordedEntities {
    /// Number of successful create calls across all entity kinds.
    pub fn create_calls(&self) -> usize {
        self.users.len() + self.profiles.len() + self.listings.len() + self.slots.len()
    }

    /// Sequence number of the user with `id`, if it was created.
    pub fn user_sequence(&self, id: UserId) -> Option<usize> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .map(|user| user.sequence)
    }

    /// Sequence number of the profile with `id`, if it was created.
    pub fn profile_sequence(&self, id: ProfileId) -> Option<usize> {
        self.profiles
            .iter()
            .find(|profile| profile.id == id)
            .map(|profile| profile.sequence)
    }

    /// Sequence number of the listing with `id`, if it was created.
    pub fn listing_sequence(&self, id: ListingId) -> Option<usize> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .map(|listing| listing.sequence)
    }

    /// Profile attributes in creation order.
    pub fn profile_seeds(&self) -> Vec<ProfileSeed> {
        self.profiles.iter().map(|p| p.seed.clone()).collect()
    }

    /// Listing attributes in creation order.
    pub fn listing_seeds(&self) -> Vec<ListingSeed> {
        self.listings.iter().map(|l| l.seed.clone()).collect()
    }

    /// Slot attributes in creation order.
    pub fn slot_seeds(&self) -> Vec<AvailabilitySlotSeed> {
        self.slots.iter().map(|s| s.seed).collect()
    }
}

/// Seed repository that keeps created records in memory.
///
/// # Examples
///
/// ```
/// use marketplace_backend::domain::ports::MarketplaceSeedRepository;
/// use marketplace_backend::test_support::RecordingSeedRepository;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let repository = RecordingSeedRepository::new();
/// repository
///     .create_user(&seed_data::customer_seed(0))
///     .await
///     .expect("create succeeds");
/// repository.release().await.expect("release succeeds");
///
/// let recorded = repository.snapshot();
/// assert_eq!(recorded.users.len(), 1);
/// assert_eq!(recorded.release_calls, 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct RecordingSeedRepository {
    state: Mutex<RecordedEntities>,
    fail_at: Option<usize>,
}

impl RecordingSeedRepository {
    /// Create a repository where every create succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose create call at zero-based position
    /// `fail_at` fails with a query error; later calls succeed again.
    pub fn failing_at(fail_at: usize) -> Self {
        Self {
            state: Mutex::default(),
            fail_at: Some(fail_at),
        }
    }

    /// Copy out everything recorded so far.
    pub fn snapshot(&self) -> RecordedEntities {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, RecordedEntities> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record<T>(
        &self,
        insert: impl FnOnce(&mut RecordedEntities, usize) -> T,
    ) -> Result<T, MarketplaceSeedRepositoryError> {
        let mut state = self.lock_state();
        if state.release_calls > 0 {
            return Err(MarketplaceSeedRepositoryError::released());
        }
        let sequence = state.create_calls();
        if self.fail_at == Some(sequence) {
            return Err(MarketplaceSeedRepositoryError::query(format!(
                "injected failure at create call {sequence}"
            )));
        }
        Ok(insert(&mut state, sequence))
    }
}

#[async_trait]
impl MarketplaceSeedRepository for RecordingSeedRepository {
    async fn create_user(&self, user: &UserSeed) -> Result<UserId, MarketplaceSeedRepositoryError> {
        self.record(|state, sequence| {
            let id = UserId::random();
            state.users.push(RecordedUser {
                sequence,
                id,
                seed: user.clone(),
            });
            id
        })
    }

    async fn create_profile(
        &self,
        user_id: UserId,
        profile: &ProfileSeed,
    ) -> Result<ProfileId, MarketplaceSeedRepositoryError> {
        self.record(|state, sequence| {
            let id = ProfileId::random();
            state.profiles.push(RecordedProfile {
                sequence,
                id,
                user_id,
                seed: profile.clone(),
            });
            id
        })
    }

    async fn create_listing(
        &self,
        profile_id: ProfileId,
        listing: &ListingSeed,
    ) -> Result<ListingId, MarketplaceSeedRepositoryError> {
        self.record(|state, sequence| {
            let id = ListingId::random();
            state.listings.push(RecordedListing {
                sequence,
                id,
                profile_id,
                seed: listing.clone(),
            });
            id
        })
    }

    async fn create_availability_slot(
        &self,
        listing_id: ListingId,
        slot: &AvailabilitySlotSeed,
    ) -> Result<SlotId, MarketplaceSeedRepositoryError> {
        self.record(|state, sequence| {
            let id = SlotId::random();
            state.slots.push(RecordedSlot {
                sequence,
                id,
                listing_id,
                seed: *slot,
            });
            id
        })
    }

    async fn release(&self) -> Result<(), MarketplaceSeedRepositoryError> {
        self.lock_state().release_calls += 1;
        Ok(())
    }
}
