//! Domain services, identifiers, and ports.
//!
//! Public surface:
//! - `MarketplaceSeeder`: creates the customer and provider hierarchy through
//!   a `MarketplaceSeedRepository`.
//! - `ConnectivityCheck`: classifies the result of a one-shot probe read.
//! - Entity identifiers (`UserId`, `ProfileId`, `ListingId`, `SlotId`).

pub mod ports;

mod connectivity_check;
mod marketplace;
mod marketplace_seeder;

pub use self::connectivity_check::{ConnectivityCheck, ProbeFailure, ProbeOutcome, is_schema_absent};
pub use self::marketplace::{ListingId, ProfileId, SlotId, UserId};
pub use self::marketplace_seeder::{MarketplaceSeeder, MarketplaceSeedingError, SeedReport};
