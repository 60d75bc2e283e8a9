//! Schema-backed temporary databases on the shared embedded cluster.
//!
//! The first caller creates a template database with `sql/` applied; each
//! test then gets its own clone. The template name carries a hash of the
//! `sql/` directory so a schema change provisions a fresh template.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use marketplace_backend::domain::ports::MarketplaceSeedRepositoryError;
use pg_embedded_setup_unpriv::test_support::hash_directory;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;

const MARKETPLACE_SCHEMA: &str = include_str!("../../sql/marketplace_schema.sql");

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const TEMPLATE_NAME_PREFIX: &str = "marketplace_template";
const TEMPLATE_PROVISION_RETRIES: usize = 5;
const TEMPLATE_PROVISION_RETRY_DELAY: Duration = Duration::from_millis(500);

fn schema_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sql")
}

fn template_database_name() -> Result<String, MarketplaceSeedRepositoryError> {
    let hash = hash_directory(schema_dir())
        .map_err(|err| MarketplaceSeedRepositoryError::query(format!("hash schema: {err}")))?;
    let short_hash = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_NAME_PREFIX}_{short_hash}"))
}

fn ensure_template_database(
    cluster: &ClusterHandle,
) -> Result<String, MarketplaceSeedRepositoryError> {
    let template_name = template_database_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(template_name.as_str())
        .map_err(|err| MarketplaceSeedRepositoryError::query(format!("template check: {err:?}")))?;

    if !exists {
        cluster
            .create_database(template_name.as_str())
            .map_err(|err| {
                MarketplaceSeedRepositoryError::query(format!("create template: {err:?}"))
            })?;
        apply_schema(&cluster.connection().database_url(&template_name))?;
    }

    Ok(template_name)
}

/// Provisions a temporary database cloned from the schema template.
pub fn provision_template_database(
    cluster: &ClusterHandle,
) -> Result<TemporaryDatabase, MarketplaceSeedRepositoryError> {
    let mut last_error = None;
    for attempt in 1..=TEMPLATE_PROVISION_RETRIES {
        let provisioned = ensure_template_database(cluster).and_then(|template_name| {
            cluster
                .temporary_database_from_template(
                    format!("test_{}", Uuid::new_v4()).as_str(),
                    template_name.as_str(),
                )
                .map_err(|err| {
                    MarketplaceSeedRepositoryError::query(format!(
                        "create database from template: attempt {attempt}/{TEMPLATE_PROVISION_RETRIES}: {err:?}"
                    ))
                })
        });
        match provisioned {
            Ok(database) => return Ok(database),
            Err(error) => last_error = Some(error),
        }
        if attempt < TEMPLATE_PROVISION_RETRIES {
            std::thread::sleep(TEMPLATE_PROVISION_RETRY_DELAY);
        }
    }

    Err(last_error.unwrap_or_else(|| {
        MarketplaceSeedRepositoryError::query("create database from template: exhausted retries")
    }))
}

/// Applies `sql/marketplace_schema.sql` to the database at `url`.
pub fn apply_schema(url: &str) -> Result<(), MarketplaceSeedRepositoryError> {
    let mut client = Client::connect(url, NoTls)
        .map_err(|err| MarketplaceSeedRepositoryError::connection(format_postgres_error(&err)))?;
    client
        .batch_execute(MARKETPLACE_SCHEMA)
        .map_err(|err| MarketplaceSeedRepositoryError::query(format_postgres_error(&err)))
}
