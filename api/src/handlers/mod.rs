//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod brands;
pub mod models;

pub use brands::{get_brand, save_brand};
pub use models::{get_model, save_model};
