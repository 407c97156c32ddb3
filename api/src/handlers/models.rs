//! Model handlers
//!
//! Endpoints for standalone car model reads and saves.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CarModel, ModelInput};
use crate::domain::ports::CatalogStore;
use crate::error::AppError;
use crate::AppState;

/// Request to create or overwrite a model
#[derive(Debug, Deserialize)]
pub struct SaveModelRequest {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub doors_count: i32,
    pub brand_id: Option<i32>,
}

/// Model as returned by the standalone model endpoints
#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub doors_count: i32,
    pub brand_id: i32,
}

impl From<CarModel> for ModelResponse {
    fn from(model: CarModel) -> Self {
        ModelResponse {
            id: model.id.0,
            name: model.name,
            kind: model.kind,
            doors_count: model.doors_count,
            brand_id: model.brand_id.0,
        }
    }
}

/// GET /catalog/models/:id
///
/// Retrieve an existing car model by its identifier.
pub async fn get_model<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i32>,
) -> Result<Json<ModelResponse>, AppError> {
    let model = state
        .catalog_service
        .get_model(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Model {} not found", id)))?;

    Ok(Json(model.into()))
}

/// POST /catalog/models
///
/// Create or overwrite a model.
pub async fn save_model<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Json(request): Json<SaveModelRequest>,
) -> Result<(StatusCode, Json<ModelResponse>), AppError> {
    let model = state
        .catalog_service
        .save_model(ModelInput {
            id: request.id,
            name: request.name,
            kind: request.kind,
            doors_count: request.doors_count,
            brand_id: request.brand_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(model.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_save_model_request() {
        let json = r#"{"id": 10, "name": "Roadster", "type": "coupe", "doors_count": 2, "brand_id": 1}"#;
        let request: SaveModelRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, 10);
        assert_eq!(request.kind, "coupe");
        assert_eq!(request.brand_id, Some(1));
    }

    #[test]
    fn parse_save_model_request_without_brand() {
        let json = r#"{"id": 10, "name": "Roadster", "type": "coupe", "doors_count": 2}"#;
        let request: SaveModelRequest = serde_json::from_str(json).unwrap();
        assert!(request.brand_id.is_none());
    }

    #[test]
    fn serialize_model_response() {
        let response = ModelResponse {
            id: 10,
            name: "Roadster".to_string(),
            kind: "coupe".to_string(),
            doors_count: 2,
            brand_id: 1,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "coupe");
        assert_eq!(json["brand_id"], 1);
    }
}
