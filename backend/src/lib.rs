//! Marketplace backend library.
//!
//! Holds the hierarchical marketplace seeder, the connectivity probe, and the
//! Diesel and PostgREST adapters that back them. The `seed-marketplace` and
//! `check-db-connection` binaries are thin wrappers over [`seeding`] and
//! [`probe`].

pub mod domain;
pub mod outbound;
pub mod probe;
pub mod seeding;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
