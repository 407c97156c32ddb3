//! PostgreSQL adapters
//!
//! Implementation of the catalog store port using SeaORM and PostgreSQL.

pub mod catalog_repo;

#[cfg(test)]
mod integration_tests;

pub use catalog_repo::PostgresCatalogStore;
