//! Port abstraction for the one-shot database connectivity probe.
//!
//! A probe source runs a single read against the `User` table and returns
//! whatever rows come back. Interpreting a failure is left to the domain.

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

define_port_error! {
    /// Errors raised by connectivity probe adapters.
    pub enum ConnectivityProbeSourceError {
        /// The database answered the query with an error.
        Query { message: String } => "probe query failed: {message}",
        /// The request never produced a response.
        Transport { message: String } => "probe transport failed: {message}",
        /// The response could not be decoded.
        Decode { message: String } => "probe response could not be decoded: {message}",
    }
}

/// Source of the sample read used to confirm connectivity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectivityProbeSource: Send + Sync {
    /// Select at most one user id and return the rows as raw JSON.
    async fn sample_users(&self) -> Result<Vec<Value>, ConnectivityProbeSourceError>;
}
