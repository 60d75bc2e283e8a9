//! Connectivity probe configuration loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const PROGRAM_NAME: &str = "check-db-connection";

/// Errors raised while resolving probe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeConfigError {
    /// Configuration sources could not be merged.
    #[error("failed to load probe configuration: {message}")]
    Load {
        /// Loader diagnostics.
        message: String,
    },
    /// A mandatory variable is unset or blank.
    #[error("missing {variable}; set it in the environment before running the probe")]
    Missing {
        /// Name of the missing variable.
        variable: &'static str,
    },
}

/// Project credentials for the probe.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEXT_PUBLIC_SUPABASE")]
pub struct ProbeSettings {
    /// Project base URL.
    pub url: Option<String>,
    /// Anonymous API key sent with the probe request.
    pub anon_key: Option<String>,
}

/// Validated, non-blank probe credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct ProbeCredentials {
    /// Project base URL as configured.
    pub url: String,
    /// Anonymous API key.
    pub anon_key: String,
}

impl std::fmt::Debug for ProbeCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeCredentials")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

impl ProbeSettings {
    /// Load settings from the environment. Command-line flags are not read.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeConfigError::Load`] when the sources cannot be merged.
    pub fn from_env() -> Result<Self, ProbeConfigError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
            ProbeConfigError::Load {
                message: err.to_string(),
            }
        })
    }

    /// Check that both values are present and non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeConfigError::Missing`] naming the first absent value.
    pub fn credentials(&self) -> Result<ProbeCredentials, ProbeConfigError> {
        let url = required(self.url.as_deref(), "NEXT_PUBLIC_SUPABASE_URL")?;
        let anon_key = required(self.anon_key.as_deref(), "NEXT_PUBLIC_SUPABASE_ANON_KEY")?;
        Ok(ProbeCredentials { url, anon_key })
    }
}

fn required(value: Option<&str>, variable: &'static str) -> Result<String, ProbeConfigError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(ProbeConfigError::Missing { variable }),
    }
}
