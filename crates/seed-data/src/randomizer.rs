//! Uniform attribute draws over bounded domains.
//!
//! Every draw takes its randomness from a `ChaCha8` generator seeded with an
//! explicit [`RngSeed`], so a seed plus a clock reading always reproduces the
//! same values. Interactive runs pick a seed from system entropy and log it.

use std::fmt;

use chrono::{DateTime, Days, TimeDelta, TimeZone, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceCatalog;
use crate::error::GenerationError;

/// Lowest hourly price a listing may carry.
pub const PRICE_PER_HOUR_MIN: i32 = 50;

/// Exclusive upper bound on hourly prices.
pub const PRICE_PER_HOUR_MAX: i32 = 100;

/// Exclusive upper bound on the number of days a slot starts after today.
pub const SLOT_DAY_OFFSET_MAX: u64 = 14;

/// Earliest hour of day a slot may start at.
pub const SLOT_START_HOUR_MIN: u32 = 9;

/// Exclusive upper bound on the slot start hour.
pub const SLOT_START_HOUR_MAX: u32 = 17;

/// Shortest slot duration in hours.
pub const SLOT_DURATION_HOURS_MIN: i64 = 1;

/// Longest slot duration in hours (inclusive).
pub const SLOT_DURATION_HOURS_MAX: i64 = 3;

/// Probability that a provider is registered for GST.
const GST_PROBABILITY: f64 = 0.5;

/// Seed value for the attribute generator.
///
/// # Example
///
/// ```
/// use seed_data::RngSeed;
///
/// let seed = RngSeed::new(2026);
/// assert_eq!(seed.value(), 2026);
/// assert_eq!(seed.to_string(), "2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RngSeed(u64);

impl RngSeed {
    /// Wrap an explicit seed value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draw a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for RngSeed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RngSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A drawn availability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    /// Start of the window, on the hour.
    pub starts_at: DateTime<Utc>,
    /// End of the window, always after `starts_at`.
    pub ends_at: DateTime<Utc>,
}

impl SlotWindow {
    /// Returns the length of the window.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.ends_at - self.starts_at
    }
}

/// Draws single attribute values from the catalog and fixed numeric ranges.
///
/// # Example
///
/// ```
/// use seed_data::{AttributeRandomizer, ReferenceCatalog, RngSeed};
///
/// let mut first = AttributeRandomizer::new(ReferenceCatalog::SYDNEY, RngSeed::new(7));
/// let mut second = AttributeRandomizer::new(ReferenceCatalog::SYDNEY, RngSeed::new(7));
///
/// assert_eq!(first.price_per_hour(), second.price_per_hour());
/// assert_eq!(
///     first.display_name().expect("names available"),
///     second.display_name().expect("names available"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AttributeRandomizer<'a> {
    catalog: ReferenceCatalog<'a>,
    seed: RngSeed,
    rng: ChaCha8Rng,
}

impl<'a> AttributeRandomizer<'a> {
    /// Create a randomizer over `catalog` seeded with `seed`.
    #[must_use]
    pub fn new(catalog: ReferenceCatalog<'a>, seed: RngSeed) -> Self {
        Self {
            catalog,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed.value()),
        }
    }

    /// Returns the catalog draws are taken from.
    #[must_use]
    pub const fn catalog(&self) -> ReferenceCatalog<'a> {
        self.catalog
    }

    /// Returns the seed the generator was initialised with.
    #[must_use]
    pub const fn seed(&self) -> RngSeed {
        self.seed
    }

    /// Draw a service category.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyVocabulary`] if the catalog has no
    /// categories.
    pub fn category(&mut self) -> Result<&'a str, GenerationError> {
        pick(&mut self.rng, self.catalog.categories(), "categories")
    }

    /// Draw a display name as an independent first and last name pair.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyVocabulary`] if either name vocabulary
    /// is empty.
    pub fn display_name(&mut self) -> Result<String, GenerationError> {
        let first = pick(&mut self.rng, self.catalog.first_names(), "first names")?;
        let last = pick(&mut self.rng, self.catalog.last_names(), "last names")?;
        Ok(format!("{first} {last}"))
    }

    /// Draw an hourly price in `[PRICE_PER_HOUR_MIN, PRICE_PER_HOUR_MAX)`.
    pub fn price_per_hour(&mut self) -> i32 {
        self.rng
            .random_range(PRICE_PER_HOUR_MIN..PRICE_PER_HOUR_MAX)
    }

    /// Flip the GST registration coin.
    pub fn gst(&mut self) -> bool {
        self.rng.random_bool(GST_PROBABILITY)
    }

    /// Draw a slot start on the hour within the next fourteen days.
    ///
    /// Dates and hours are read in the zone `now` carries: the date is the
    /// local date plus `0..SLOT_DAY_OFFSET_MAX` days and the local hour lies
    /// in `[SLOT_START_HOUR_MIN, SLOT_START_HOUR_MAX)`. The result is
    /// converted to UTC for storage.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::SlotOutOfRange`] if the date arithmetic
    /// overflows or the local time does not exist in the zone.
    pub fn slot_start<Tz>(&mut self, now: DateTime<Tz>) -> Result<DateTime<Utc>, GenerationError>
    where
        Tz: TimeZone,
        Tz::Offset: Copy,
    {
        let day_offset = self.rng.random_range(0..SLOT_DAY_OFFSET_MAX);
        let hour = self
            .rng
            .random_range(SLOT_START_HOUR_MIN..SLOT_START_HOUR_MAX);
        let out_of_range = || GenerationError::SlotOutOfRange {
            now: now.with_timezone(&Utc),
            day_offset,
            hour,
        };
        let zone = now.timezone();

        now.date_naive()
            .checked_add_days(Days::new(day_offset))
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .and_then(|start| zone.from_local_datetime(&start).earliest())
            .map(|start| start.with_timezone(&Utc))
            .ok_or_else(out_of_range)
    }

    /// Draw a slot length of one to three whole hours.
    pub fn slot_duration(&mut self) -> TimeDelta {
        TimeDelta::hours(
            self.rng
                .random_range(SLOT_DURATION_HOURS_MIN..=SLOT_DURATION_HOURS_MAX),
        )
    }

    /// Draw a start and a duration, then combine them into a window.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if either end of the window cannot be
    /// represented.
    pub fn slot_window<Tz>(&mut self, now: DateTime<Tz>) -> Result<SlotWindow, GenerationError>
    where
        Tz: TimeZone,
        Tz::Offset: Copy,
    {
        let starts_at = self.slot_start(now)?;
        let duration = self.slot_duration();
        let ends_at = starts_at.checked_add_signed(duration).ok_or(
            GenerationError::SlotEndOutOfRange {
                starts_at,
                duration_hours: duration.num_hours(),
            },
        )?;
        Ok(SlotWindow { starts_at, ends_at })
    }
}

fn pick<'a, R>(
    rng: &mut R,
    vocabulary: &[&'a str],
    name: &'static str,
) -> Result<&'a str, GenerationError>
where
    R: Rng + ?Sized,
{
    vocabulary
        .choose(rng)
        .copied()
        .ok_or(GenerationError::EmptyVocabulary { vocabulary: name })
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, Timelike};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalog::{CATEGORIES, CatalogLocation, FIRST_NAMES, LAST_NAMES};

    const DRAWS: usize = 500;

    #[fixture]
    fn randomizer() -> AttributeRandomizer<'static> {
        AttributeRandomizer::new(ReferenceCatalog::SYDNEY, RngSeed::new(42))
    }

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 21, 45, 12)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    fn categories_come_from_the_catalog(mut randomizer: AttributeRandomizer<'static>) {
        for _ in 0..DRAWS {
            let category = randomizer.category().expect("categories available");
            assert!(CATEGORIES.contains(&category), "unexpected {category}");
        }
    }

    #[rstest]
    fn every_category_is_reachable(mut randomizer: AttributeRandomizer<'static>) {
        let drawn: std::collections::HashSet<_> = (0..DRAWS)
            .map(|_| randomizer.category().expect("categories available"))
            .collect();
        assert_eq!(drawn.len(), CATEGORIES.len());
    }

    #[rstest]
    fn display_names_pair_catalog_first_and_last_names(
        mut randomizer: AttributeRandomizer<'static>,
    ) {
        for _ in 0..DRAWS {
            let name = randomizer.display_name().expect("names available");
            let (first, last) = name.split_once(' ').expect("name has two parts");
            assert!(FIRST_NAMES.contains(&first), "unexpected first name {first}");
            assert!(LAST_NAMES.contains(&last), "unexpected last name {last}");
        }
    }

    #[rstest]
    fn prices_stay_within_bounds(mut randomizer: AttributeRandomizer<'static>) {
        for _ in 0..DRAWS {
            let price = randomizer.price_per_hour();
            assert!(
                (PRICE_PER_HOUR_MIN..PRICE_PER_HOUR_MAX).contains(&price),
                "price {price} out of range"
            );
        }
    }

    #[rstest]
    fn gst_flag_takes_both_values(mut randomizer: AttributeRandomizer<'static>) {
        let flags: Vec<bool> = (0..DRAWS).map(|_| randomizer.gst()).collect();
        assert!(flags.contains(&true));
        assert!(flags.contains(&false));
    }

    #[rstest]
    fn slot_starts_fall_on_business_hours_within_two_weeks(
        mut randomizer: AttributeRandomizer<'static>,
        now: DateTime<Utc>,
    ) {
        let today = now.date_naive();
        let last_day = NaiveDate::from_ymd_opt(2026, 10, 29).expect("valid date");

        for _ in 0..DRAWS {
            let start = randomizer.slot_start(now).expect("start in range");
            let date = start.date_naive();
            assert!(date >= today && date <= last_day, "date {date} out of range");
            assert!((SLOT_START_HOUR_MIN..SLOT_START_HOUR_MAX).contains(&start.hour()));
            assert_eq!(start.minute(), 0);
            assert_eq!(start.second(), 0);
            assert_eq!(start.nanosecond(), 0);
        }
    }

    #[rstest]
    fn slot_hours_are_drawn_in_the_clock_zone(mut randomizer: AttributeRandomizer<'static>) {
        // Sydney daylight time; 22:00 UTC is 09:00 on the next local day.
        let sydney = FixedOffset::east_opt(11 * 3600).expect("valid offset");
        let now = Utc
            .with_ymd_and_hms(2026, 10, 16, 22, 0, 0)
            .single()
            .expect("valid timestamp")
            .with_timezone(&sydney);
        let local_today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
        let local_last_day = NaiveDate::from_ymd_opt(2026, 10, 30).expect("valid date");

        for _ in 0..DRAWS {
            let start = randomizer.slot_start(now).expect("start in range");
            let local = start.with_timezone(&sydney);
            assert!(
                (SLOT_START_HOUR_MIN..SLOT_START_HOUR_MAX).contains(&local.hour()),
                "local start {local}"
            );
            assert!(
                local.date_naive() >= local_today && local.date_naive() <= local_last_day,
                "local date {} out of range",
                local.date_naive()
            );
        }
    }

    #[rstest]
    fn slot_windows_last_one_to_three_hours(
        mut randomizer: AttributeRandomizer<'static>,
        now: DateTime<Utc>,
    ) {
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..DRAWS {
            let window = randomizer.slot_window(now).expect("window in range");
            assert!(window.ends_at > window.starts_at);
            let hours = window.duration().num_hours();
            assert!((SLOT_DURATION_HOURS_MIN..=SLOT_DURATION_HOURS_MAX).contains(&hours));
            assert_eq!(window.duration(), TimeDelta::hours(hours));
            seen.insert(hours);
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn same_seed_replays_the_same_draws(now: DateTime<Utc>) {
        let mut first = AttributeRandomizer::new(ReferenceCatalog::SYDNEY, RngSeed::new(9));
        let mut second = AttributeRandomizer::new(ReferenceCatalog::SYDNEY, RngSeed::new(9));

        for _ in 0..50 {
            assert_eq!(first.category(), second.category());
            assert_eq!(first.display_name(), second.display_name());
            assert_eq!(first.price_per_hour(), second.price_per_hour());
            assert_eq!(first.gst(), second.gst());
            assert_eq!(first.slot_window(now), second.slot_window(now));
        }
    }

    #[rstest]
    fn different_seeds_diverge() {
        let mut first = AttributeRandomizer::new(ReferenceCatalog::SYDNEY, RngSeed::new(1));
        let mut second = AttributeRandomizer::new(ReferenceCatalog::SYDNEY, RngSeed::new(2));

        let first_prices: Vec<_> = (0..20).map(|_| first.price_per_hour()).collect();
        let second_prices: Vec<_> = (0..20).map(|_| second.price_per_hour()).collect();
        assert_ne!(first_prices, second_prices);
    }

    #[rstest]
    #[case::categories(&[], &["Ada"], &["Byron"], "categories")]
    fn empty_categories_are_reported(
        #[case] categories: &'static [&'static str],
        #[case] first_names: &'static [&'static str],
        #[case] last_names: &'static [&'static str],
        #[case] vocabulary: &'static str,
    ) {
        let catalog = ReferenceCatalog::new(&[], categories, first_names, last_names);
        let mut randomizer = AttributeRandomizer::new(catalog, RngSeed::new(1));

        assert_eq!(
            randomizer.category(),
            Err(GenerationError::EmptyVocabulary { vocabulary })
        );
    }

    #[rstest]
    #[case::first_names(&[], &["Byron"], "first names")]
    #[case::last_names(&["Ada"], &[], "last names")]
    fn empty_name_vocabularies_are_reported(
        #[case] first_names: &'static [&'static str],
        #[case] last_names: &'static [&'static str],
        #[case] vocabulary: &'static str,
    ) {
        let locations: [CatalogLocation; 0] = [];
        let catalog = ReferenceCatalog::new(&locations, &CATEGORIES, first_names, last_names);
        let mut randomizer = AttributeRandomizer::new(catalog, RngSeed::new(1));

        assert_eq!(
            randomizer.display_name(),
            Err(GenerationError::EmptyVocabulary { vocabulary })
        );
    }

    #[test]
    fn slot_start_near_the_end_of_time_is_out_of_range() {
        let mut randomizer = AttributeRandomizer::new(ReferenceCatalog::SYDNEY, RngSeed::new(3));
        let result = (0..DRAWS)
            .map(|_| randomizer.slot_start(DateTime::<Utc>::MAX_UTC))
            .find(Result::is_err);

        assert!(matches!(
            result,
            Some(Err(GenerationError::SlotOutOfRange { .. }))
        ));
    }

    #[test]
    fn seed_round_trips_through_conversions() {
        let seed = RngSeed::from(77);
        assert_eq!(seed, RngSeed::new(77));
        assert_eq!(seed.value(), 77);
        assert_eq!(
            AttributeRandomizer::new(ReferenceCatalog::SYDNEY, seed).seed(),
            seed
        );
    }
}
