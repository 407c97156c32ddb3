//! Car model domain entity

use serde::{Deserialize, Serialize};

use super::brand::BrandId;

/// Unique identifier for a car model
///
/// Caller-assigned and positive; never generated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelId(pub i32);

impl From<i32> for ModelId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A car model
///
/// `brand_id` is a plain foreign-key value into the brands table, not an
/// owning reference; the brand side of the relation is resolved by lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarModel {
    pub id: ModelId,
    pub name: String,
    pub kind: String,
    pub doors_count: i32,
    pub brand_id: BrandId,
}

/// Payload for creating or overwriting a model
///
/// `brand_id` is optional here because nested brand payloads omit it; the
/// brand cascade fills it in before the write. A standalone model save must
/// supply it.
#[derive(Debug, Clone)]
pub struct ModelInput {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub doors_count: i32,
    pub brand_id: Option<i32>,
}
