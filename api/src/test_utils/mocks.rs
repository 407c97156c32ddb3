//! Mock implementations of port traits
//!
//! An in-memory catalog store with staged-write transactions: writes land in
//! the transaction buffer and only reach the tables on commit. That is
//! enough to exercise the service's commit and rollback paths without a
//! database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Brand, BrandId, CarModel, ModelId};
use crate::domain::ports::{CatalogStore, ModelScan};
use crate::error::DomainError;

#[derive(Default)]
struct Tables {
    brands: BTreeMap<i32, Brand>,
    models: BTreeMap<i32, CarModel>,
}

/// Writes staged by one transaction, applied on commit and dropped on
/// rollback
#[derive(Default)]
pub struct InMemoryTx {
    brands: Vec<Brand>,
    models: Vec<CarModel>,
}

/// In-memory implementation of CatalogStore
#[derive(Default)]
pub struct InMemoryCatalogStore {
    tables: Arc<RwLock<Tables>>,
    fail_model_writes: AtomicBool,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent model upsert fail, to drive rollback paths
    pub fn fail_model_writes(&self) {
        self.fail_model_writes.store(true, Ordering::SeqCst);
    }

    /// Number of committed brand rows
    pub fn brand_count(&self) -> usize {
        self.tables.read().unwrap().brands.len()
    }

    /// Number of committed model rows
    pub fn model_count(&self) -> usize {
        self.tables.read().unwrap().models.len()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    type Tx = InMemoryTx;

    async fn begin(&self) -> Result<Self::Tx, DomainError> {
        Ok(InMemoryTx::default())
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), DomainError> {
        let mut tables = self.tables.write().unwrap();
        for brand in tx.brands {
            tables.brands.insert(brand.id.0, brand);
        }
        for model in tx.models {
            tables.models.insert(model.id.0, model);
        }
        Ok(())
    }

    async fn rollback(&self, _tx: Self::Tx) -> Result<(), DomainError> {
        Ok(())
    }

    async fn find_brand(&self, id: BrandId) -> Result<Option<Brand>, DomainError> {
        Ok(self.tables.read().unwrap().brands.get(&id.0).cloned())
    }

    async fn find_model(&self, id: ModelId) -> Result<Option<CarModel>, DomainError> {
        Ok(self.tables.read().unwrap().models.get(&id.0).cloned())
    }

    async fn upsert_brand(&self, tx: &mut Self::Tx, brand: &Brand) -> Result<(), DomainError> {
        tx.brands.push(brand.clone());
        Ok(())
    }

    async fn upsert_model(&self, tx: &mut Self::Tx, model: &CarModel) -> Result<(), DomainError> {
        if self.fail_model_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Transaction(
                "model write rejected".to_string(),
            ));
        }
        tx.models.push(model.clone());
        Ok(())
    }

    async fn models_by_brand(
        &self,
        brand_id: BrandId,
        scan: ModelScan,
    ) -> Result<Vec<CarModel>, DomainError> {
        let tables = self.tables.read().unwrap();
        // BTreeMap iteration gives id-ascending order, the natural order of
        // the backing table.
        let mut models: Vec<CarModel> = tables
            .models
            .values()
            .filter(|m| m.brand_id == brand_id)
            .cloned()
            .collect();

        if let Some(after) = scan.after {
            models.retain(|m| m.id > after);
        } else if let Some(before) = scan.before {
            models.retain(|m| m.id < before);
            models.reverse();
        }
        if let Some(limit) = scan.limit {
            models.truncate(limit as usize);
        }

        Ok(models)
    }
}
