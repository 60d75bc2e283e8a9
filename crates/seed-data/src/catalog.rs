//! Fixed reference data every seeded attribute is drawn from.
//!
//! The catalog is static: one provider is created per location, so the length
//! of [`LOCATIONS`] decides how many providers a seeding pass produces.

use serde::Serialize;

/// A named place anchoring a provider's geography.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogLocation {
    name: &'static str,
    lat: f64,
    lng: f64,
}

impl CatalogLocation {
    /// Create a catalog location.
    #[must_use]
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    /// Returns the location name, also used as the listing address.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns the lowercase name with spaces removed.
    ///
    /// # Example
    ///
    /// ```
    /// use seed_data::CatalogLocation;
    ///
    /// let location = CatalogLocation::new("Sydney CBD", -33.8688, 151.2093);
    /// assert_eq!(location.slug(), "sydneycbd");
    /// ```
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .chars()
            .filter(|c| *c != ' ')
            .flat_map(char::to_lowercase)
            .collect()
    }
}

/// Locations served by seeded providers, in creation order.
pub const LOCATIONS: [CatalogLocation; 10] = [
    CatalogLocation::new("Sydney CBD", -33.8688, 151.2093),
    CatalogLocation::new("Parramatta", -33.8136, 151.0034),
    CatalogLocation::new("Chatswood", -33.7968, 151.1832),
    CatalogLocation::new("Hurstville", -33.9673, 151.1023),
    CatalogLocation::new("Bondi", -33.8915, 151.2767),
    CatalogLocation::new("Newtown", -33.8973, 151.1794),
    CatalogLocation::new("Manly", -33.8000, 151.2858),
    CatalogLocation::new("Cronulla", -33.0570, 151.1520),
    CatalogLocation::new("Blacktown", -33.7710, 150.9060),
    CatalogLocation::new("Hornsby", -33.7042, 151.1000),
];

/// Service categories a listing may be offered under.
pub const CATEGORIES: [&str; 6] = [
    "Cleaning",
    "Plumbing",
    "Gardening",
    "Tutoring",
    "Electrician",
    "Personal Training",
];

/// First names used for provider display names.
pub const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Peter", "Mary", "David", "Sarah", "Michael", "Emily", "Chris", "Laura",
];

/// Last names used for provider display names.
pub const LAST_NAMES: [&str; 10] = [
    "Smith", "Jones", "Williams", "Brown", "Wilson", "Taylor", "Johnson", "White", "Martin",
    "Anderson",
];

/// Read-only view over the locations and vocabularies used for seeding.
///
/// # Example
///
/// ```
/// use seed_data::ReferenceCatalog;
///
/// let catalog = ReferenceCatalog::default();
/// assert_eq!(catalog.locations().len(), 10);
/// assert!(catalog.categories().contains(&"Plumbing"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCatalog<'a> {
    locations: &'a [CatalogLocation],
    categories: &'a [&'a str],
    first_names: &'a [&'a str],
    last_names: &'a [&'a str],
}

impl ReferenceCatalog<'static> {
    /// The built-in catalog of Sydney suburbs.
    pub const SYDNEY: Self = Self {
        locations: &LOCATIONS,
        categories: &CATEGORIES,
        first_names: &FIRST_NAMES,
        last_names: &LAST_NAMES,
    };
}

impl<'a> ReferenceCatalog<'a> {
    /// Build a catalog over caller-supplied data.
    #[must_use]
    pub const fn new(
        locations: &'a [CatalogLocation],
        categories: &'a [&'a str],
        first_names: &'a [&'a str],
        last_names: &'a [&'a str],
    ) -> Self {
        Self {
            locations,
            categories,
            first_names,
            last_names,
        }
    }

    /// Returns the locations in creation order.
    #[must_use]
    pub const fn locations(&self) -> &'a [CatalogLocation] {
        self.locations
    }

    /// Returns the service category labels.
    #[must_use]
    pub const fn categories(&self) -> &'a [&'a str] {
        self.categories
    }

    /// Returns the first-name vocabulary.
    #[must_use]
    pub const fn first_names(&self) -> &'a [&'a str] {
        self.first_names
    }

    /// Returns the last-name vocabulary.
    #[must_use]
    pub const fn last_names(&self) -> &'a [&'a str] {
        self.last_names
    }
}

impl Default for ReferenceCatalog<'static> {
    fn default() -> Self {
        Self::SYDNEY
    }
}
