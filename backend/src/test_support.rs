//! Test utilities for the backend crate.
//!
//! These helpers are shared by unit tests (in `src/`) and integration tests
//! (in `tests/`). They are compiled for tests and when the `test-support`
//! feature is enabled.

mod clock;
mod recording_seed_repository;

pub use clock::FixedClock;
pub use recording_seed_repository::{
    RecordedEntities, RecordedListing, RecordedProfile, RecordedSlot, RecordedUser,
    RecordingSeedRepository,
};
