//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between seed records and
//! Diesel rows. Row structs (`models.rs`) and table definitions (`schema.rs`)
//! stay private to this module, and every database error is mapped to the
//! port's error type before it leaves the adapter.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use marketplace_backend::outbound::persistence::{
//!     DbPool, DieselMarketplaceSeedRepository, PoolConfig,
//! };
//! use mockable::DefaultClock;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/marketplace")).await?;
//! let repository = DieselMarketplaceSeedRepository::new(pool, Arc::new(DefaultClock));
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_marketplace_seed_repository;
mod models;
mod pool;
mod schema;

pub use diesel_marketplace_seed_repository::DieselMarketplaceSeedRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
