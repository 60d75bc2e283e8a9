//! Error types for the seed-data crate.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while drawing seed attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A catalog vocabulary needed for a draw has no entries.
    #[error("catalog vocabulary '{vocabulary}' is empty")]
    EmptyVocabulary {
        /// Name of the empty vocabulary.
        vocabulary: &'static str,
    },

    /// The drawn slot start cannot be represented as a timestamp.
    #[error("slot start {day_offset} days after {now} at {hour}:00 is out of range")]
    SlotOutOfRange {
        /// Clock reading the slot was drawn against.
        now: DateTime<Utc>,
        /// Drawn day offset.
        day_offset: u64,
        /// Drawn start hour.
        hour: u32,
    },

    /// The drawn slot end cannot be represented as a timestamp.
    #[error("slot end {duration_hours}h after {starts_at} is out of range")]
    SlotEndOutOfRange {
        /// Start of the slot.
        starts_at: DateTime<Utc>,
        /// Drawn duration in hours.
        duration_hours: i64,
    },
}
