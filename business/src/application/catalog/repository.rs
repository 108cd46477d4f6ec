use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::catalog::image::ImageAttachmentResolver;
use crate::domain::catalog::repository::{AddResult, CatalogRepository, FetchResult};
use crate::domain::errors::{StorageError, TransportError};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::services::{AddProductReceipt, ProductSubmission, RemoteCatalogClient};
use crate::domain::product::store::LocalCatalogStore;

pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CatalogRepositoryImpl {
    pub remote: Arc<dyn RemoteCatalogClient>,
    pub store: Arc<dyn LocalCatalogStore>,
    pub images: Arc<ImageAttachmentResolver>,
    pub logger: Arc<dyn Logger>,
    pub remote_timeout: Duration,
}

impl CatalogRepositoryImpl {
    /// Runs a remote call, treating an elapsed timeout as a transport failure.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, TransportError>>,
    ) -> Result<T, TransportError> {
        tokio::time::timeout(self.remote_timeout, call)
            .await
            .map_err(|_| TransportError::timeout())?
    }

    async fn submit(&self, product: &Product) -> Result<AddProductReceipt, TransportError> {
        let attachment = match product.image.as_deref() {
            Some(reference) => self.images.resolve(reference).await,
            None => None,
        };
        let submission = ProductSubmission::from_product(product, attachment);

        self.logger.debug(&format!(
            "Sending product to remote catalog: name={}, type={}, price={}, tax={}, image={}",
            submission.product_name,
            submission.product_type,
            submission.price,
            submission.tax,
            submission
                .image
                .as_ref()
                .map(|i| i.file_name.as_str())
                .unwrap_or("none"),
        ));

        let outcome = self.bounded(self.remote.add(&submission)).await;

        if let Some(attachment) = &submission.image {
            self.images.release(attachment).await;
        }

        let receipt = outcome?;
        if !receipt.success {
            return Err(TransportError::Rejected(receipt.message));
        }
        Ok(receipt)
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn fetch_catalog(&self) -> Result<FetchResult, StorageError> {
        self.logger.info("Fetching catalog from remote");

        match self.bounded(self.remote.list()).await {
            Ok(products) => {
                self.logger
                    .info(&format!("Fetched {} products from remote", products.len()));
                // An empty answer never wipes the cache.
                if !products.is_empty()
                    && let Err(e) = self.store.upsert_many(&products).await
                {
                    self.logger.recovered("Failed to cache fetched products", &e);
                }
                Ok(FetchResult::Fetched(products))
            }
            Err(reason) => {
                self.logger
                    .recovered("Error fetching products from remote", &reason);
                let products = self.store.read_all().await.inspect_err(|e| {
                    self.logger
                        .error(&format!("Local catalog unavailable: {}", e));
                })?;
                self.logger.info(&format!(
                    "Serving {} cached products",
                    products.len()
                ));
                Ok(FetchResult::FellBackToCache { products, reason })
            }
        }
    }

    async fn add_product(&self, product: Product) -> Result<AddResult, StorageError> {
        if let Err(kind) = product.validate() {
            self.logger
                .warn(&format!("Rejected product before submission: {}", kind));
            return Ok(AddResult::ValidationFailed(kind));
        }

        self.logger.info(&format!("Adding product: {}", product.name));

        // The local write must follow the remote attempt, whatever its outcome.
        match self.submit(&product).await {
            Ok(receipt) => {
                self.logger.info(&format!(
                    "Remote catalog stored product with id: {}",
                    receipt.product_id
                ));
                self.logger.debug(&format!(
                    "Remote catalog echoed: name={}, price={}, tax={}, image={}",
                    receipt.product_details.name,
                    receipt.product_details.price,
                    receipt.product_details.tax,
                    receipt.product_details.image.as_deref().unwrap_or("none"),
                ));
                self.store.upsert_one(&product).await?;
                Ok(AddResult::Added {
                    product,
                    remote_id: receipt.product_id,
                })
            }
            Err(reason) => {
                self.logger.recovered("Error adding product remotely", &reason);
                self.store.upsert_one(&product).await?;
                self.logger
                    .info(&format!("Product kept locally: {}", product.name));
                Ok(AddResult::AddedLocallyOnly { product, reason })
            }
        }
    }
}
