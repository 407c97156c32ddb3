//! Catalog service
//!
//! Orchestrates brand and model saves and fetches over the catalog store.
//! A brand save cascades to its nested models inside a single transaction;
//! a standalone model save opens its own. The transaction handle is passed
//! down explicitly, so a nested write can never commit or discard the unit
//! it participates in.

use std::sync::Arc;

use crate::domain::entities::{
    Brand, BrandId, BrandInput, BrandWithModels, CarModel, ModelId, ModelInput,
};
use crate::domain::ports::{CatalogStore, ModelScan};
use crate::error::DomainError;

/// Service for catalog operations
pub struct CatalogService<S: CatalogStore> {
    store: Arc<S>,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create or overwrite a model in its own transaction.
    pub async fn save_model(&self, input: ModelInput) -> Result<CarModel, DomainError> {
        let model = validated_model(input)?;

        let mut tx = self.store.begin().await?;
        match self.store.upsert_model(&mut tx, &model).await {
            Ok(()) => {
                self.store.commit(tx).await?;
                Ok(model)
            }
            Err(err) => {
                self.roll_back(tx).await;
                Err(err)
            }
        }
    }

    /// Create or overwrite a model inside the caller's transaction.
    ///
    /// Used by the brand cascade so the brand row and every model write
    /// share one atomic unit. Never commits or rolls back `tx`.
    async fn save_model_in(
        &self,
        tx: &mut S::Tx,
        input: ModelInput,
    ) -> Result<CarModel, DomainError> {
        let model = validated_model(input)?;
        self.store.upsert_model(tx, &model).await?;
        Ok(model)
    }

    /// Point lookup of a model.
    pub async fn get_model(&self, id: i32) -> Result<Option<CarModel>, DomainError> {
        self.store.find_model(ModelId(id)).await
    }

    /// Create or overwrite a brand and cascade to its nested models.
    ///
    /// Either the brand row and every model persist together, or none do.
    pub async fn save_brand(&self, input: BrandInput) -> Result<BrandWithModels, DomainError> {
        if input.id <= 0 {
            return Err(DomainError::Validation(
                "Id should be a positive number.".to_string(),
            ));
        }
        let brand = Brand {
            id: BrandId(input.id),
            name: input.name,
            country: input.country,
        };

        let mut tx = self.store.begin().await?;
        match self.save_brand_in(&mut tx, &brand, input.models).await {
            Ok(models) => {
                self.store.commit(tx).await?;
                Ok(BrandWithModels { brand, models })
            }
            Err(err) => {
                self.roll_back(tx).await;
                Err(err)
            }
        }
    }

    async fn save_brand_in(
        &self,
        tx: &mut S::Tx,
        brand: &Brand,
        inputs: Vec<ModelInput>,
    ) -> Result<Vec<CarModel>, DomainError> {
        self.store.upsert_brand(tx, brand).await?;

        let mut models = Vec::with_capacity(inputs.len());
        for input in inputs {
            // The brand owns its models; the payload's reference (if any) is
            // replaced with the just-saved brand's id.
            let input = ModelInput {
                brand_id: Some(brand.id.0),
                ..input
            };
            models.push(self.save_model_in(tx, input).await?);
        }
        Ok(models)
    }

    /// Fetch a brand with a cursor window over its models.
    ///
    /// `after` and `before` are mutually exclusive. Non-positive cursors and
    /// limits are ignored rather than rejected.
    pub async fn get_brand(
        &self,
        id: i32,
        limit: Option<i32>,
        after: Option<i32>,
        before: Option<i32>,
    ) -> Result<Option<BrandWithModels>, DomainError> {
        if after.is_some() && before.is_some() {
            return Err(DomainError::Validation(
                "Either after, or before should be specified.".to_string(),
            ));
        }

        let Some(brand) = self.store.find_brand(BrandId(id)).await? else {
            return Ok(None);
        };

        let scan = ModelScan {
            after: after.filter(|v| *v > 0).map(ModelId),
            before: before.filter(|v| *v > 0).map(ModelId),
            limit: limit.filter(|v| *v > 0).map(|v| v as u64),
        };
        let mut models = self.store.models_by_brand(brand.id, scan).await?;
        // Callers always see models ascending, whatever the scan direction.
        models.sort_by_key(|m| m.id);

        Ok(Some(BrandWithModels { brand, models }))
    }

    async fn roll_back(&self, tx: S::Tx) {
        if let Err(err) = self.store.rollback(tx).await {
            tracing::error!("Rollback failed: {}", err);
        }
    }
}

/// Check a model payload before any write begins.
fn validated_model(input: ModelInput) -> Result<CarModel, DomainError> {
    if input.id <= 0 {
        return Err(DomainError::Validation(
            "Id should be a positive number.".to_string(),
        ));
    }
    let brand_id = match input.brand_id {
        Some(id) if id > 0 => BrandId(id),
        _ => {
            return Err(DomainError::Validation(
                "BrandId should be a positive number.".to_string(),
            ))
        }
    };

    Ok(CarModel {
        id: ModelId(input.id),
        name: input.name,
        kind: input.kind,
        doors_count: input.doors_count,
        brand_id,
    })
}
