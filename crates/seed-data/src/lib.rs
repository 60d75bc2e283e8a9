//! Reproducible seed data generation for the local-services marketplace.
//!
//! This crate holds the parts of marketplace seeding that involve no I/O: the
//! fixed reference catalog, the attribute randomizer, and the seed records
//! handed to a persistence gateway. It is independent of backend domain types
//! so that the backend can depend on it without cycles.
//!
//! # Overview
//!
//! - [`ReferenceCatalog`] lists the locations, service categories, and name
//!   vocabularies every draw is taken from.
//! - [`AttributeRandomizer`] samples single attributes from bounded domains
//!   using a `ChaCha8` generator seeded from an explicit [`RngSeed`].
//! - The generator functions ([`customer_seed`], [`provider_seed`],
//!   [`profile_seed`], [`listing_seed`], [`availability_slot_seed`]) build the
//!   record for one entity level.
//! - [`FanOut`] fixes how many children each level receives.
//!
//! # Example
//!
//! ```
//! use seed_data::{AttributeRandomizer, ReferenceCatalog, RngSeed, listing_seed};
//!
//! let catalog = ReferenceCatalog::SYDNEY;
//! let mut randomizer = AttributeRandomizer::new(catalog, RngSeed::new(42));
//! let location = catalog.locations().first().expect("catalog has locations");
//!
//! let listing = listing_seed(&mut randomizer, location).expect("listing generates");
//!
//! assert!((50..100).contains(&listing.price_per_hour));
//! assert_eq!(listing.location.address, "Sydney CBD");
//! ```

mod catalog;
mod error;
mod generator;
mod randomizer;
mod seed;

pub use catalog::{CATEGORIES, CatalogLocation, FIRST_NAMES, LAST_NAMES, LOCATIONS, ReferenceCatalog};
pub use error::GenerationError;
pub use generator::{
    FanOut, availability_slot_seed, customer_seed, listing_seed, profile_seed, provider_seed,
};
pub use randomizer::{
    AttributeRandomizer, PRICE_PER_HOUR_MAX, PRICE_PER_HOUR_MIN, RngSeed, SLOT_DAY_OFFSET_MAX,
    SLOT_DURATION_HOURS_MAX, SLOT_DURATION_HOURS_MIN, SLOT_START_HOUR_MAX, SLOT_START_HOUR_MIN,
    SlotWindow,
};
pub use seed::{AvailabilitySlotSeed, ListingLocation, ListingSeed, ProfileSeed, RoleSeed, UserSeed};
