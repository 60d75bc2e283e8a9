//! Diesel table definitions for the marketplace schema.
//!
//! The marketplace application owns this schema and names its tables and
//! columns in quoted camel case; `sql_name` maps them to snake_case Rust
//! identifiers. `backend/sql/marketplace_schema.sql` holds the matching DDL.

diesel::table! {
    /// Customer and provider accounts.
    #[sql_name = "User"]
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Login email.
        email -> Text,
        /// `CUSTOMER` or `PROVIDER`.
        role -> Text,
        /// Record creation timestamp.
        #[sql_name = "createdAt"]
        created_at -> Timestamptz,
        /// Last modification timestamp.
        #[sql_name = "updatedAt"]
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Provider profiles, one per provider account.
    #[sql_name = "Profile"]
    profiles (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning user.
        #[sql_name = "userId"]
        user_id -> Uuid,
        /// Public display name.
        #[sql_name = "displayName"]
        display_name -> Text,
        /// Free-text biography.
        bio -> Text,
        /// GST registration flag.
        gst -> Bool,
        /// Record creation timestamp.
        #[sql_name = "createdAt"]
        created_at -> Timestamptz,
        /// Last modification timestamp.
        #[sql_name = "updatedAt"]
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Service listings offered by a profile.
    #[sql_name = "Listing"]
    listings (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Offering profile.
        #[sql_name = "providerId"]
        provider_id -> Uuid,
        /// Listing headline.
        title -> Text,
        /// Service category label.
        category -> Text,
        /// Free-text description.
        description -> Text,
        /// Whole-unit hourly price.
        #[sql_name = "pricePerHour"]
        price_per_hour -> Int4,
        /// `{lat, lng, address}` object.
        location -> Jsonb,
        /// Record creation timestamp.
        #[sql_name = "createdAt"]
        created_at -> Timestamptz,
        /// Last modification timestamp.
        #[sql_name = "updatedAt"]
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Bookable windows for a listing.
    #[sql_name = "AvailabilitySlot"]
    availability_slots (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Parent listing.
        #[sql_name = "listingId"]
        listing_id -> Uuid,
        /// Window start.
        #[sql_name = "startsAt"]
        starts_at -> Timestamptz,
        /// Window end.
        #[sql_name = "endsAt"]
        ends_at -> Timestamptz,
        /// Record creation timestamp.
        #[sql_name = "createdAt"]
        created_at -> Timestamptz,
        /// Last modification timestamp.
        #[sql_name = "updatedAt"]
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(profiles -> users (user_id));
diesel::joinable!(listings -> profiles (provider_id));
diesel::joinable!(availability_slots -> listings (listing_id));

diesel::allow_tables_to_appear_in_same_query!(users, profiles, listings, availability_slots);
