//! Internal Diesel row structs for marketplace inserts.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{availability_slots, listings, profiles, users};

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub role: &'a str,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating profile records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub(crate) struct NewProfileRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: &'a str,
    pub bio: &'a str,
    pub gst: bool,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating listing records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = listings)]
pub(crate) struct NewListingRow<'a> {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub title: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub price_per_hour: i32,
    pub location: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating availability slot records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = availability_slots)]
pub(crate) struct NewAvailabilitySlotRow {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
