//! Connectivity probe wiring for the `check-db-connection` binary.

use std::sync::Arc;

use thiserror::Error;
use url::Url;

use crate::domain::{ConnectivityCheck, ProbeFailure, ProbeOutcome};
use crate::outbound::postgrest::PostgrestProbeSource;
use crate::probe::config::{ProbeConfigError, ProbeSettings};

/// Errors that make the probe exit unsuccessfully.
#[derive(Debug, Error)]
pub enum ProbeRunError {
    /// Credentials were missing; no request was sent.
    #[error(transparent)]
    Config(#[from] ProbeConfigError),
    /// The probe ran and failed.
    #[error(transparent)]
    Failure(#[from] ProbeFailure),
}

/// Validate credentials, send the probe read, and classify the result.
///
/// # Errors
///
/// Returns [`ProbeRunError::Config`] before any network call when a value
/// is missing, and [`ProbeRunError::Failure`] for query or critical errors.
pub async fn run_connectivity_probe(
    settings: &ProbeSettings,
) -> Result<ProbeOutcome, ProbeRunError> {
    let credentials = settings.credentials()?;
    let project_url = Url::parse(&credentials.url).map_err(|err| {
        ProbeFailure::critical(format!("invalid project URL {}: {err}", credentials.url))
    })?;
    let source = PostgrestProbeSource::new(&project_url, credentials.anon_key)
        .map_err(ProbeFailure::critical)?;

    Ok(ConnectivityCheck::new(Arc::new(source)).run().await?)
}
