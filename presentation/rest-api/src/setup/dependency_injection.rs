use std::sync::Arc;

use logger::TracingLogger;
use media::content_resolver::UriContentResolver;
use persistence::product::store::ProductStoreSqlite;
use remote::catalog_client::RemoteCatalogClientHttp;
use remote::client::CatalogHttpClient;

use business::application::catalog::image::ImageAttachmentResolver;
use business::application::catalog::repository::CatalogRepositoryImpl;
use business::application::catalog::view_state::CatalogViewState;

use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::SqlitePool, catalog: CatalogConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let store = Arc::new(ProductStoreSqlite::new(pool));
        let http_client = CatalogHttpClient::new(catalog.base_url.clone(), catalog.timeout)?;
        let remote = Arc::new(RemoteCatalogClientHttp::new(http_client));

        tokio::fs::create_dir_all(&catalog.image_scratch_dir).await?;
        let images = Arc::new(ImageAttachmentResolver {
            content_resolver: Arc::new(UriContentResolver),
            scratch_dir: catalog.image_scratch_dir,
            logger: logger.clone(),
        });

        // Catalog sync
        let repository = Arc::new(CatalogRepositoryImpl {
            remote,
            store,
            images,
            logger: logger.clone(),
            remote_timeout: catalog.timeout,
        });
        let view_state = Arc::new(CatalogViewState::new(repository, logger));

        tracing::info!(base_url = %catalog.base_url, "loading catalog");
        view_state.refresh().await;

        let health_api = crate::api::health::routes::Api::new(view_state.clone());
        let catalog_api = crate::api::catalog::routes::CatalogApi::new(view_state);

        Ok(Self {
            health_api,
            catalog_api,
        })
    }
}
