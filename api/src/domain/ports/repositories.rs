//! Catalog store port
//!
//! The persistence interface the catalog service depends on. Implementations
//! are provided by adapters (e.g., PostgreSQL). The store exposes raw
//! primitives only; business rules live in the service layer.

use async_trait::async_trait;

use crate::domain::entities::{Brand, BrandId, CarModel, ModelId};
use crate::error::DomainError;

/// Cursor window over a brand's models.
///
/// At most one of `after`/`before` is set; the service resolves pagination
/// direction before handing the scan to the store. `after` scans `id > after`
/// ascending, `before` scans `id < before` descending, neither scans every
/// model of the brand in natural order. `limit` truncates in scan order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelScan {
    pub after: Option<ModelId>,
    pub before: Option<ModelId>,
    pub limit: Option<u64>,
}

/// Transactional access to the brands and models tables.
///
/// Mutating operations take an explicit transaction handle and never commit
/// or roll back themselves; the transaction lifecycle belongs to the caller.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Transaction handle threaded through mutating calls.
    type Tx: Send;

    /// Open a new transaction.
    async fn begin(&self) -> Result<Self::Tx, DomainError>;

    /// Commit a transaction, making its writes visible.
    async fn commit(&self, tx: Self::Tx) -> Result<(), DomainError>;

    /// Discard a transaction and all writes staged in it.
    async fn rollback(&self, tx: Self::Tx) -> Result<(), DomainError>;

    /// Point lookup of a brand by id.
    async fn find_brand(&self, id: BrandId) -> Result<Option<Brand>, DomainError>;

    /// Point lookup of a model by id.
    async fn find_model(&self, id: ModelId) -> Result<Option<CarModel>, DomainError>;

    /// Insert the brand if its id is absent, otherwise overwrite every field
    /// of the existing row.
    async fn upsert_brand(&self, tx: &mut Self::Tx, brand: &Brand) -> Result<(), DomainError>;

    /// Insert the model if its id is absent, otherwise overwrite every field
    /// of the existing row.
    async fn upsert_model(&self, tx: &mut Self::Tx, model: &CarModel) -> Result<(), DomainError>;

    /// Models of a brand within the scan window, in scan order.
    async fn models_by_brand(
        &self,
        brand_id: BrandId,
        scan: ModelScan,
    ) -> Result<Vec<CarModel>, DomainError>;
}
