//! Seeder configuration loaded via OrthoConfig.

use std::env;
use std::ffi::OsString;

use ortho_config::OrthoConfig;
use seed_data::RngSeed;
use serde::Deserialize;
use thiserror::Error;

const PROGRAM_NAME: &str = "seed-marketplace";
const FALLBACK_DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Errors raised while resolving seeder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeederConfigError {
    /// Configuration sources could not be merged.
    #[error("failed to load seeder configuration: {message}")]
    Load {
        /// Loader diagnostics.
        message: String,
    },
    /// Neither the prefixed variable nor `DATABASE_URL` is set.
    #[error("database URL missing: set MARKETPLACE_SEED_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    /// A database URL was supplied but is blank.
    #[error("{source_name} must not be empty")]
    EmptyDatabaseUrl {
        /// Variable that held the blank value.
        source_name: &'static str,
    },
}

/// Configuration values controlling a seeding pass.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MARKETPLACE_SEED")]
pub struct SeederSettings {
    /// Database connection URL. Falls back to `DATABASE_URL` when unset.
    pub database_url: Option<String>,
    /// Fixed seed for attribute draws. Drawn from entropy when unset.
    pub rng_seed: Option<u64>,
}

impl SeederSettings {
    /// Load settings from the environment. Command-line flags are not read.
    ///
    /// # Errors
    ///
    /// Returns [`SeederConfigError::Load`] when a value cannot be parsed.
    pub fn from_env() -> Result<Self, SeederConfigError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
            SeederConfigError::Load {
                message: err.to_string(),
            }
        })
    }

    /// Resolve the database URL, consulting `DATABASE_URL` as a fallback.
    ///
    /// # Errors
    ///
    /// Returns [`SeederConfigError`] when no URL is configured or the
    /// configured one is blank.
    pub fn database_url(&self) -> Result<String, SeederConfigError> {
        resolve_database_url(
            self.database_url.as_deref(),
            env::var(FALLBACK_DATABASE_URL_ENV).ok(),
        )
    }

    /// Return the configured seed, or draw one from entropy.
    pub fn rng_seed(&self) -> RngSeed {
        self.rng_seed
            .map_or_else(RngSeed::from_entropy, RngSeed::new)
    }
}

fn resolve_database_url(
    configured: Option<&str>,
    fallback: Option<String>,
) -> Result<String, SeederConfigError> {
    if let Some(value) = configured {
        if value.trim().is_empty() {
            return Err(SeederConfigError::EmptyDatabaseUrl {
                source_name: "MARKETPLACE_SEED_DATABASE_URL",
            });
        }
        return Ok(value.to_owned());
    }

    let from_env = fallback.ok_or(SeederConfigError::MissingDatabaseUrl)?;
    if from_env.trim().is_empty() {
        return Err(SeederConfigError::EmptyDatabaseUrl {
            source_name: FALLBACK_DATABASE_URL_ENV,
        });
    }
    Ok(from_env)
}
