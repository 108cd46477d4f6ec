use async_trait::async_trait;

use crate::domain::errors::{StorageError, TransportError};
use crate::domain::product::errors::ValidationError;
use crate::domain::product::model::Product;

/// Outcome of a catalog fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    /// The remote catalog answered; products are in server order.
    Fetched(Vec<Product>),
    /// The remote catalog failed and the local cache was read instead.
    FellBackToCache {
        products: Vec<Product>,
        reason: TransportError,
    },
}

impl FetchResult {
    pub fn products(&self) -> &[Product] {
        match self {
            FetchResult::Fetched(products) => products,
            FetchResult::FellBackToCache { products, .. } => products,
        }
    }
}

/// Outcome of adding a product.
#[derive(Debug, Clone, PartialEq)]
pub enum AddResult {
    /// Accepted by the remote catalog and written locally.
    Added { product: Product, remote_id: i64 },
    /// Rejected before any network or storage access.
    ValidationFailed(ValidationError),
    /// The remote call failed; the product was still written locally.
    AddedLocallyOnly {
        product: Product,
        reason: TransportError,
    },
}

/// Single source of truth for catalog reads and the only writer to the local store.
///
/// Transport failures never escape this boundary. A `StorageError` is returned
/// only when the local store is the last remaining source and it fails.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn fetch_catalog(&self) -> Result<FetchResult, StorageError>;
    async fn add_product(&self, product: Product) -> Result<AddResult, StorageError>;
}
