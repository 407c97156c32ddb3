//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod catalog_service;

pub use catalog_service::CatalogService;
