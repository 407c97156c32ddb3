//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Brand, BrandId, BrandInput, CarModel, ModelId, ModelInput};

/// Create a test brand with default values
pub fn test_brand(id: i32) -> Brand {
    Brand {
        id: BrandId(id),
        name: "Acme".to_string(),
        country: "US".to_string(),
    }
}

/// Create a test model owned by the given brand
pub fn test_model(id: i32, brand_id: i32) -> CarModel {
    CarModel {
        id: ModelId(id),
        name: format!("model-{}", id),
        kind: "sedan".to_string(),
        doors_count: 4,
        brand_id: BrandId(brand_id),
    }
}

/// Create a model save payload
pub fn model_input(id: i32, brand_id: Option<i32>) -> ModelInput {
    ModelInput {
        id,
        name: format!("model-{}", id),
        kind: "sedan".to_string(),
        doors_count: 4,
        brand_id,
    }
}

/// Create a brand save payload with nested model payloads
pub fn brand_input(id: i32, model_ids: &[i32]) -> BrandInput {
    BrandInput {
        id,
        name: "Acme".to_string(),
        country: "US".to_string(),
        models: model_ids.iter().map(|&m| model_input(m, None)).collect(),
    }
}
