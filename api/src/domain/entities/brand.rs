//! Brand domain entity
//!
//! A car brand row plus the inputs and views the catalog service works
//! with. Models are not embedded in `Brand` itself; a brand's models are a
//! lookup over the models table, materialized as [`BrandWithModels`].

use serde::{Deserialize, Serialize};

use super::model::{CarModel, ModelInput};

/// Unique identifier for a brand
///
/// Caller-assigned and positive; never generated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrandId(pub i32);

impl From<i32> for BrandId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A car brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    pub country: String,
}

/// A brand together with its materialized models view, always ordered by
/// model id ascending.
#[derive(Debug, Clone)]
pub struct BrandWithModels {
    pub brand: Brand,
    pub models: Vec<CarModel>,
}

/// Payload for creating or overwriting a brand, including its nested model
/// payloads. The cascade assigns each model's brand reference.
#[derive(Debug, Clone)]
pub struct BrandInput {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub models: Vec<ModelInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_id_display() {
        assert_eq!(BrandId(7).to_string(), "7");
    }

    #[test]
    fn brand_id_from_i32() {
        assert_eq!(BrandId::from(3), BrandId(3));
    }
}
