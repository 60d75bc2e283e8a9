//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod connectivity_probe_source;
mod marketplace_seed_repository;

#[cfg(test)]
pub use connectivity_probe_source::MockConnectivityProbeSource;
pub use connectivity_probe_source::{ConnectivityProbeSource, ConnectivityProbeSourceError};
#[cfg(test)]
pub use marketplace_seed_repository::MockMarketplaceSeedRepository;
pub use marketplace_seed_repository::{MarketplaceSeedRepository, MarketplaceSeedRepositoryError};
