//! Seed records handed to the persistence gateway.
//!
//! Each record carries only the attributes a caller chose; identifiers and
//! modification stamps are assigned when the record is written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role assigned to a seeded user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleSeed {
    /// A customer account with no profile.
    Customer,
    /// A provider account that owns a profile and listings.
    Provider,
}

impl RoleSeed {
    /// Returns the stored role label.
    ///
    /// # Example
    ///
    /// ```
    /// use seed_data::RoleSeed;
    ///
    /// assert_eq!(RoleSeed::Provider.as_str(), "PROVIDER");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Provider => "PROVIDER",
        }
    }
}

/// A user account to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    /// Login email, unique per user.
    pub email: String,
    /// Account role.
    pub role: RoleSeed,
}

/// A provider profile to create for an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSeed {
    /// Public display name.
    pub display_name: String,
    /// Free-text biography.
    pub bio: String,
    /// Whether the provider is registered for GST.
    pub gst: bool,
}

/// Geographic anchor of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingLocation {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Human-readable address, the catalog location name.
    pub address: String,
}

/// A service listing to create under a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSeed {
    /// Listing headline.
    pub title: String,
    /// Service category label.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Whole-unit hourly price.
    pub price_per_hour: i32,
    /// Where the service is offered.
    pub location: ListingLocation,
}

/// A bookable window to create under a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlotSeed {
    /// Inclusive start of the window.
    pub starts_at: DateTime<Utc>,
    /// Exclusive end of the window.
    pub ends_at: DateTime<Utc>,
}
