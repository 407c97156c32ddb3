//! Brand handlers
//!
//! Endpoints for brand reads and saves. A brand save carries its models and
//! persists them in the same transaction; a brand read exposes cursor
//! pagination over the models.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{BrandInput, BrandWithModels, CarModel, ModelInput};
use crate::domain::ports::CatalogStore;
use crate::error::AppError;
use crate::AppState;

/// Request to create or overwrite a brand with its nested models
#[derive(Debug, Deserialize)]
pub struct SaveBrandRequest {
    pub id: i32,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub models: Vec<BrandModelPayload>,
}

/// Nested model payload on a brand save; carries no brand reference, the
/// cascade assigns the enclosing brand's id.
#[derive(Debug, Deserialize)]
pub struct BrandModelPayload {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub doors_count: i32,
}

/// Query parameters for paginating a brand's models
#[derive(Debug, Deserialize)]
pub struct BrandModelsQuery {
    /// Cap on the number of models returned; all models by default
    pub limit: Option<i32>,
    /// Cursor: only models with id greater than this
    pub after: Option<i32>,
    /// Cursor: only models with id less than this
    pub before: Option<i32>,
}

/// Brand as returned by the brand endpoints
#[derive(Debug, Serialize)]
pub struct BrandResponse {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub models: Vec<BrandModelResponse>,
}

/// Model as it appears inside a brand response. The brand reference is
/// implied by the enclosing brand and omitted.
#[derive(Debug, Serialize)]
pub struct BrandModelResponse {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub doors_count: i32,
}

impl From<CarModel> for BrandModelResponse {
    fn from(model: CarModel) -> Self {
        BrandModelResponse {
            id: model.id.0,
            name: model.name,
            kind: model.kind,
            doors_count: model.doors_count,
        }
    }
}

impl From<BrandWithModels> for BrandResponse {
    fn from(saved: BrandWithModels) -> Self {
        BrandResponse {
            id: saved.brand.id.0,
            name: saved.brand.name,
            country: saved.brand.country,
            models: saved.models.into_iter().map(|m| m.into()).collect(),
        }
    }
}

/// GET /catalog/brands/:id
///
/// Retrieve an existing brand with a window over its models. `after` and
/// `before` are mutually exclusive cursors; the returned models are always
/// ordered by id ascending.
pub async fn get_brand<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i32>,
    Query(query): Query<BrandModelsQuery>,
) -> Result<Json<BrandResponse>, AppError> {
    let brand = state
        .catalog_service
        .get_brand(id, query.limit, query.after, query.before)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Brand {} not found", id)))?;

    Ok(Json(brand.into()))
}

/// POST /catalog/brands
///
/// Create or overwrite a brand together with its models. The brand row and
/// every model write share one transaction.
pub async fn save_brand<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Json(request): Json<SaveBrandRequest>,
) -> Result<(StatusCode, Json<BrandResponse>), AppError> {
    let input = BrandInput {
        id: request.id,
        name: request.name,
        country: request.country,
        models: request
            .models
            .into_iter()
            .map(|m| ModelInput {
                id: m.id,
                name: m.name,
                kind: m.kind,
                doors_count: m.doors_count,
                brand_id: None,
            })
            .collect(),
    };

    let saved = state.catalog_service.save_brand(input).await?;

    Ok((StatusCode::CREATED, Json(saved.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Brand, BrandId, ModelId};

    #[test]
    fn parse_brand_models_query_empty() {
        let query: BrandModelsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.limit.is_none());
        assert!(query.after.is_none());
        assert!(query.before.is_none());
    }

    #[test]
    fn parse_save_brand_request_without_models() {
        let json = r#"{"id": 1, "name": "Acme", "country": "US"}"#;
        let request: SaveBrandRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, 1);
        assert!(request.models.is_empty());
    }

    #[test]
    fn parse_save_brand_request_with_models() {
        let json = r#"{
            "id": 1,
            "name": "Acme",
            "country": "US",
            "models": [{"id": 10, "name": "Ten", "type": "sedan", "doors_count": 4}]
        }"#;
        let request: SaveBrandRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.models.len(), 1);
        assert_eq!(request.models[0].kind, "sedan");
    }

    #[test]
    fn brand_response_omits_model_brand_reference() {
        let saved = BrandWithModels {
            brand: Brand {
                id: BrandId(1),
                name: "Acme".to_string(),
                country: "US".to_string(),
            },
            models: vec![CarModel {
                id: ModelId(10),
                name: "Ten".to_string(),
                kind: "sedan".to_string(),
                doors_count: 4,
                brand_id: BrandId(1),
            }],
        };

        let json = serde_json::to_value(BrandResponse::from(saved)).unwrap();
        assert_eq!(json["models"][0]["id"], 10);
        assert!(json["models"][0].get("brand_id").is_none());
    }
}
