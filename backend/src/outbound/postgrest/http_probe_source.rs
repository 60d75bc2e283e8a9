//! Reqwest-backed PostgREST probe adapter.
//!
//! This adapter owns transport details only: the REST URL, the API key
//! headers, status mapping, and JSON decoding of the returned rows.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::ports::{ConnectivityProbeSource, ConnectivityProbeSourceError};

const PROBE_TABLE: &str = "User";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestErrorDto {
    message: Option<String>,
    code: Option<String>,
}

/// Probe source that reads one row from the `User` table over PostgREST.
pub struct PostgrestProbeSource {
    client: Client,
    endpoint: Url,
    anon_key: String,
}

impl PostgrestProbeSource {
    /// Build an adapter for the project at `project_url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketplace_backend::outbound::postgrest::PostgrestProbeSource;
    /// use url::Url;
    ///
    /// let project_url = Url::parse("https://abc.supabase.co").expect("valid URL");
    /// let source = PostgrestProbeSource::new(&project_url, "anon-key").expect("adapter builds");
    /// assert_eq!(source.endpoint().path(), "/rest/v1/User");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the REST endpoint cannot be derived from
    /// `project_url` or the reqwest client cannot be constructed.
    pub fn new(
        project_url: &Url,
        anon_key: impl Into<String>,
    ) -> Result<Self, PostgrestSourceError> {
        Self::with_timeout(project_url, anon_key, DEFAULT_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the REST endpoint cannot be derived from
    /// `project_url` or the reqwest client cannot be constructed.
    pub fn with_timeout(
        project_url: &Url,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PostgrestSourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: probe_endpoint(project_url)?,
            anon_key: anon_key.into(),
        })
    }

    /// Returns the URL the probe reads from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Errors raised while constructing the probe adapter.
#[derive(Debug, thiserror::Error)]
pub enum PostgrestSourceError {
    /// The project URL cannot carry a REST path.
    #[error("cannot derive REST endpoint from {url}: {reason}")]
    Endpoint {
        /// Configured project URL.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[async_trait]
impl ConnectivityProbeSource for PostgrestProbeSource {
    async fn sample_users(&self) -> Result<Vec<Value>, ConnectivityProbeSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header("apikey", self.anon_key.as_str())
            .bearer_auth(self.anon_key.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_rows(body.as_ref())
    }
}

fn probe_endpoint(project_url: &Url) -> Result<Url, PostgrestSourceError> {
    let reject = |reason: &str| PostgrestSourceError::Endpoint {
        url: project_url.to_string(),
        reason: reason.to_owned(),
    };
    if project_url.cannot_be_a_base() {
        return Err(reject("URL cannot be a base"));
    }

    let mut endpoint = project_url.clone();
    endpoint
        .path_segments_mut()
        .map_err(|()| reject("URL cannot be a base"))?
        .pop_if_empty()
        .extend(["rest", "v1", PROBE_TABLE]);
    endpoint
        .query_pairs_mut()
        .clear()
        .append_pair("select", "id")
        .append_pair("limit", "1");
    Ok(endpoint)
}

fn parse_rows(body: &[u8]) -> Result<Vec<Value>, ConnectivityProbeSourceError> {
    serde_json::from_slice(body).map_err(|error| {
        ConnectivityProbeSourceError::decode(format!("invalid PostgREST rows payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> ConnectivityProbeSourceError {
    ConnectivityProbeSourceError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ConnectivityProbeSourceError {
    if let Ok(PostgrestErrorDto {
        message: Some(message),
        code,
    }) = serde_json::from_slice::<PostgrestErrorDto>(body)
    {
        return match code {
            Some(code) => ConnectivityProbeSourceError::query(format!("{message} ({code})")),
            None => ConnectivityProbeSourceError::query(message),
        };
    }

    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };
    ConnectivityProbeSourceError::query(message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
