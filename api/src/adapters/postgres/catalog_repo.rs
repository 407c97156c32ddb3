//! PostgreSQL adapter for the catalog store
//!
//! Transactions are SeaORM [`DatabaseTransaction`] values; the service
//! decides when to open, commit, or discard one. Upserts look the row up by
//! its caller-assigned id inside the transaction and either insert or
//! overwrite every field.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::domain::entities::{Brand, BrandId, CarModel, ModelId};
use crate::domain::ports::{CatalogStore, ModelScan};
use crate::entity::{brands, models};
use crate::error::DomainError;

/// PostgreSQL implementation of CatalogStore
pub struct PostgresCatalogStore {
    db: DatabaseConnection,
}

impl PostgresCatalogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogStore for PostgresCatalogStore {
    type Tx = DatabaseTransaction;

    async fn begin(&self) -> Result<Self::Tx, DomainError> {
        self.db
            .begin()
            .await
            .map_err(|e| DomainError::Transaction(e.to_string()))
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), DomainError> {
        tx.commit()
            .await
            .map_err(|e| DomainError::Transaction(e.to_string()))
    }

    async fn rollback(&self, tx: Self::Tx) -> Result<(), DomainError> {
        tx.rollback()
            .await
            .map_err(|e| DomainError::Transaction(e.to_string()))
    }

    async fn find_brand(&self, id: BrandId) -> Result<Option<Brand>, DomainError> {
        let result = brands::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_model(&self, id: ModelId) -> Result<Option<CarModel>, DomainError> {
        let result = models::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn upsert_brand(&self, tx: &mut Self::Tx, brand: &Brand) -> Result<(), DomainError> {
        let existing = brands::Entity::find_by_id(brand.id.0)
            .one(&*tx)
            .await
            .map_err(|e| DomainError::Transaction(e.to_string()))?;

        let row = brands::ActiveModel {
            id: Set(brand.id.0),
            name: Set(brand.name.clone()),
            country: Set(brand.country.clone()),
        };

        let result = if existing.is_some() {
            row.update(&*tx).await.map(|_| ())
        } else {
            row.insert(&*tx).await.map(|_| ())
        };

        result.map_err(|e| DomainError::Transaction(e.to_string()))
    }

    async fn upsert_model(&self, tx: &mut Self::Tx, model: &CarModel) -> Result<(), DomainError> {
        let existing = models::Entity::find_by_id(model.id.0)
            .one(&*tx)
            .await
            .map_err(|e| DomainError::Transaction(e.to_string()))?;

        let row = models::ActiveModel {
            id: Set(model.id.0),
            name: Set(model.name.clone()),
            kind: Set(model.kind.clone()),
            doors_count: Set(model.doors_count),
            brand_id: Set(model.brand_id.0),
        };

        let result = if existing.is_some() {
            row.update(&*tx).await.map(|_| ())
        } else {
            row.insert(&*tx).await.map(|_| ())
        };

        result.map_err(|e| DomainError::Transaction(e.to_string()))
    }

    async fn models_by_brand(
        &self,
        brand_id: BrandId,
        scan: ModelScan,
    ) -> Result<Vec<CarModel>, DomainError> {
        let mut query = models::Entity::find().filter(models::Column::BrandId.eq(brand_id.0));

        if let Some(after) = scan.after {
            query = query
                .filter(models::Column::Id.gt(after.0))
                .order_by_asc(models::Column::Id);
        } else if let Some(before) = scan.before {
            query = query
                .filter(models::Column::Id.lt(before.0))
                .order_by_desc(models::Column::Id);
        }

        if let Some(limit) = scan.limit {
            query = query.limit(limit);
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<brands::Model> for Brand {
    fn from(model: brands::Model) -> Self {
        Brand {
            id: BrandId(model.id),
            name: model.name,
            country: model.country,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<models::Model> for CarModel {
    fn from(model: models::Model) -> Self {
        CarModel {
            id: ModelId(model.id),
            name: model.name,
            kind: model.kind,
            doors_count: model.doors_count,
            brand_id: BrandId(model.brand_id),
        }
    }
}
