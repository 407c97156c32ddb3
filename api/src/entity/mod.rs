//! SeaORM table entities
//!
//! Relational mappings for the catalog tables. Kept separate from the
//! domain entities in `domain::entities`.

pub mod brands;
pub mod models;
