use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::catalog::repository::{AddResult, CatalogRepository, FetchResult};
use crate::domain::catalog::snapshot::CatalogSnapshot;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ValidationError;
use crate::domain::product::model::Product;

/// Observable catalog state for the UI.
///
/// Every repository outcome publishes a whole new [`CatalogSnapshot`]; readers
/// either poll [`CatalogViewState::snapshot`] or watch a receiver from
/// [`CatalogViewState::subscribe`].
pub struct CatalogViewState {
    repository: Arc<dyn CatalogRepository>,
    logger: Arc<dyn Logger>,
    state: watch::Sender<CatalogSnapshot>,
}

impl CatalogViewState {
    pub fn new(repository: Arc<dyn CatalogRepository>, logger: Arc<dyn Logger>) -> Self {
        let (state, _) = watch::channel(CatalogSnapshot::default());
        Self {
            repository,
            logger,
            state,
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.state.subscribe()
    }

    fn publish(&self, snapshot: CatalogSnapshot) {
        self.state.send_replace(snapshot);
    }

    /// Re-materializes the product list from the repository.
    pub async fn refresh(&self) {
        self.publish(CatalogSnapshot::loading_from(&self.snapshot()));

        let next = match self.repository.fetch_catalog().await {
            Ok(FetchResult::Fetched(products)) => CatalogSnapshot::loaded(products, None),
            Ok(FetchResult::FellBackToCache { products, reason }) => CatalogSnapshot::loaded(
                products,
                Some(format!("Showing cached products: {}", reason)),
            ),
            Err(e) => {
                self.logger
                    .error(&format!("Failed to fetch products: {}", e));
                CatalogSnapshot::loaded(Vec::new(), Some(format!("Failed to fetch products: {}", e)))
            }
        };

        self.logger.debug(&format!(
            "Catalog snapshot updated with {} products",
            next.products.len()
        ));
        self.publish(next);
    }

    /// Adds a product, then refreshes so locally written items become visible.
    ///
    /// Returns the validation failure, if any, after recording it in the error slot.
    pub async fn submit(&self, product: Product) -> Result<(), ValidationError> {
        match self.repository.add_product(product).await {
            Ok(AddResult::ValidationFailed(kind)) => {
                self.publish(CatalogSnapshot::with_error(&self.snapshot(), kind.message()));
                Err(kind)
            }
            Ok(AddResult::Added { .. }) => {
                self.refresh().await;
                Ok(())
            }
            Ok(AddResult::AddedLocallyOnly { reason, .. }) => {
                self.refresh().await;
                let current = self.snapshot();
                if current.error.is_none() {
                    self.publish(CatalogSnapshot::with_error(
                        &current,
                        format!("Product saved locally; sync failed: {}", reason),
                    ));
                }
                Ok(())
            }
            Err(e) => {
                self.logger.error(&format!("Failed to add product: {}", e));
                self.publish(CatalogSnapshot::with_error(
                    &self.snapshot(),
                    format!("Failed to add product: {}", e),
                ));
                Ok(())
            }
        }
    }
}
