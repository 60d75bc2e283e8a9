//! Identifiers for seeded marketplace entities.
//!
//! Each entity level has its own identifier type so that a listing can only
//! be attached to a profile identifier, a slot only to a listing identifier,
//! and so on. The persistence adapter assigns the values.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an identifier returned by storage.
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Borrow the underlying UUID.
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_entity_id! {
    /// Identifier of a created user account, customer or provider.
    UserId
}

define_entity_id! {
    /// Identifier of a created provider profile.
    ProfileId
}

define_entity_id! {
    /// Identifier of a created service listing.
    ListingId
}

define_entity_id! {
    /// Identifier of a created availability slot.
    SlotId
}
