use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::Product;

/// Persistent local cache of the catalog.
///
/// Upserts replace any record sharing the product's identity. Implementations
/// serialize concurrent writes themselves.
#[async_trait]
pub trait LocalCatalogStore: Send + Sync {
    async fn upsert_many(&self, products: &[Product]) -> Result<(), StorageError>;
    async fn upsert_one(&self, product: &Product) -> Result<(), StorageError>;
    async fn read_all(&self) -> Result<Vec<Product>, StorageError>;
}
