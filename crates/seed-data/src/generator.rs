//! Builders for one seed record per entity level.
//!
//! Customers and providers need no randomness; profiles, listings, and slots
//! draw their variable attributes from an [`AttributeRandomizer`]. The order
//! of draws inside each builder is fixed so that a seed replays exactly.

use chrono::{DateTime, TimeZone};

use crate::catalog::CatalogLocation;
use crate::error::GenerationError;
use crate::randomizer::AttributeRandomizer;
use crate::seed::{
    AvailabilitySlotSeed, ListingLocation, ListingSeed, ProfileSeed, RoleSeed, UserSeed,
};

/// Number of children created at each level of the hierarchy.
///
/// Providers are not counted here: one is created per catalog location.
///
/// # Example
///
/// ```
/// use seed_data::FanOut;
///
/// let fan_out = FanOut::default();
/// assert_eq!(fan_out.customers, 5);
/// assert_eq!(fan_out.records_for_providers(10), 10 + 10 + 30 + 240);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOut {
    /// Customer accounts created before any provider.
    pub customers: usize,
    /// Listings created under each provider profile.
    pub listings_per_profile: usize,
    /// Availability slots created under each listing.
    pub slots_per_listing: usize,
}

impl FanOut {
    /// Returns how many create calls a run with `providers` providers makes,
    /// excluding customers. Each provider costs a user and a profile.
    #[must_use]
    pub const fn records_for_providers(&self, providers: usize) -> usize {
        let listings = providers * self.listings_per_profile;
        providers * 2 + listings + listings * self.slots_per_listing
    }
}

impl Default for FanOut {
    fn default() -> Self {
        Self {
            customers: 5,
            listings_per_profile: 3,
            slots_per_listing: 8,
        }
    }
}

/// Build the customer account at zero-based `index`.
///
/// # Example
///
/// ```
/// use seed_data::{RoleSeed, customer_seed};
///
/// let customer = customer_seed(3);
/// assert_eq!(customer.email, "customer3@test.com");
/// assert_eq!(customer.role, RoleSeed::Customer);
/// ```
#[must_use]
pub fn customer_seed(index: usize) -> UserSeed {
    UserSeed {
        email: format!("customer{index}@test.com"),
        role: RoleSeed::Customer,
    }
}

/// Build the provider account for `location`.
#[must_use]
pub fn provider_seed(location: &CatalogLocation) -> UserSeed {
    UserSeed {
        email: format!("{}provider@test.com", location.slug()),
        role: RoleSeed::Provider,
    }
}

/// Build the profile of the provider serving `location`.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyVocabulary`] if a name vocabulary is empty.
pub fn profile_seed(
    randomizer: &mut AttributeRandomizer<'_>,
    location: &CatalogLocation,
) -> Result<ProfileSeed, GenerationError> {
    let display_name = randomizer.display_name()?;
    let gst = randomizer.gst();
    Ok(ProfileSeed {
        display_name,
        bio: format!(
            "Experienced professional providing top-quality services in {}.",
            location.name()
        ),
        gst,
    })
}

/// Build one listing anchored at `location`.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyVocabulary`] if the catalog has no
/// categories.
pub fn listing_seed(
    randomizer: &mut AttributeRandomizer<'_>,
    location: &CatalogLocation,
) -> Result<ListingSeed, GenerationError> {
    let category = randomizer.category()?;
    let price_per_hour = randomizer.price_per_hour();
    Ok(ListingSeed {
        title: format!("{category} service in {}", location.name()),
        category: category.to_owned(),
        description: format!(
            "Professional {category} services available. Book now for a free quote."
        ),
        price_per_hour,
        location: ListingLocation {
            lat: location.lat(),
            lng: location.lng(),
            address: location.name().to_owned(),
        },
    })
}

/// Build one availability slot relative to `now`, in the zone `now` carries.
///
/// # Errors
///
/// Returns [`GenerationError`] if the drawn window cannot be represented.
pub fn availability_slot_seed<Tz>(
    randomizer: &mut AttributeRandomizer<'_>,
    now: DateTime<Tz>,
) -> Result<AvailabilitySlotSeed, GenerationError>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    let window = randomizer.slot_window(now)?;
    Ok(AvailabilitySlotSeed {
        starts_at: window.starts_at,
        ends_at: window.ends_at,
    })
}
