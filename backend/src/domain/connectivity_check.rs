//! Database connectivity check.
//!
//! Runs the probe source's sample read once and classifies the result. A
//! missing `User` table still proves that the credentials reached the
//! database, so it counts as a successful check.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::{ConnectivityProbeSource, ConnectivityProbeSourceError};

/// Error message fragments that mean the schema has not been created yet.
const SCHEMA_ABSENT_MARKERS: [&str; 2] = [r#"relation "User" does not exist"#, "Could not find the table"];

/// Successful connectivity outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The database rejected the query because the table does not exist.
    SchemaAbsent {
        /// Message returned by the database.
        message: String,
    },
    /// The query returned rows (possibly none).
    Connected {
        /// Rows returned by the sample read.
        rows: Vec<Value>,
    },
}

/// Failed connectivity outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    /// The database answered with an error other than a missing table.
    #[error("connection test failed: {message}")]
    Query {
        /// Message returned by the database or transport.
        message: String,
    },
    /// Something outside the classified paths went wrong.
    #[error("critical error during connection test: {message}")]
    Critical {
        /// Description of the failure.
        message: String,
    },
}

impl ProbeFailure {
    /// Create a critical failure from any displayable error.
    pub fn critical(error: impl std::fmt::Display) -> Self {
        Self::Critical {
            message: error.to_string(),
        }
    }
}

/// Returns true when `message` reports a missing `User` table.
///
/// # Examples
///
/// ```
/// use marketplace_backend::domain::is_schema_absent;
///
/// assert!(is_schema_absent(r#"relation "User" does not exist"#));
/// assert!(!is_schema_absent("Invalid API key"));
/// ```
pub fn is_schema_absent(message: &str) -> bool {
    SCHEMA_ABSENT_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

/// Service that runs one connectivity probe.
#[derive(Clone)]
pub struct ConnectivityCheck<S> {
    source: Arc<S>,
}

impl<S> ConnectivityCheck<S> {
    /// Create a check over the given probe source.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> ConnectivityCheck<S>
where
    S: ConnectivityProbeSource,
{
    /// Run the sample read and classify its result.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeFailure::Query`] when the database or transport reports
    /// an error other than a missing table, and [`ProbeFailure::Critical`]
    /// when the response cannot be understood.
    pub async fn run(&self) -> Result<ProbeOutcome, ProbeFailure> {
        info!("testing database connection");
        match self.source.sample_users().await {
            Ok(rows) => {
                info!(rows = rows.len(), "connection successful");
                Ok(ProbeOutcome::Connected { rows })
            }
            Err(ConnectivityProbeSourceError::Query { message }) if is_schema_absent(&message) => {
                info!(
                    %message,
                    "connection successful; the User table does not exist yet"
                );
                Ok(ProbeOutcome::SchemaAbsent { message })
            }
            Err(
                ConnectivityProbeSourceError::Query { message }
                | ConnectivityProbeSourceError::Transport { message },
            ) => {
                warn!(%message, "connection test failed");
                Err(ProbeFailure::Query { message })
            }
            Err(error @ ConnectivityProbeSourceError::Decode { .. }) => {
                Err(ProbeFailure::critical(error))
            }
        }
    }
}
