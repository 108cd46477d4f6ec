use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::application::catalog::view_state::CatalogViewState;

use crate::api::catalog::dto::{AddProductRequest, CatalogSnapshotResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    view_state: Arc<CatalogViewState>,
}

impl CatalogApi {
    pub fn new(view_state: Arc<CatalogViewState>) -> Self {
        Self { view_state }
    }
}

/// Product catalog API
///
/// Exposes the offline-capable catalog state to the UI.
#[OpenApi]
impl CatalogApi {
    /// Current catalog state
    ///
    /// Returns the last materialized product list with its loading flag and
    /// error or advisory message. Does not contact the remote catalog.
    /// `query` narrows the list to products whose name contains it, ignoring case.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_catalog(&self, query: Query<Option<String>>) -> Json<CatalogSnapshotResponse> {
        let snapshot = self.view_state.snapshot();
        match query.0.as_deref() {
            Some(query) => Json(snapshot.filtered(query).into()),
            None => Json(snapshot.into()),
        }
    }

    /// Refresh the catalog
    ///
    /// Fetches the remote catalog, falling back to the local cache when the
    /// remote service is unavailable.
    #[oai(path = "/catalog/refresh", method = "post", tag = "ApiTags::Catalog")]
    async fn refresh_catalog(&self) -> Json<CatalogSnapshotResponse> {
        self.view_state.refresh().await;
        Json(self.view_state.snapshot().into())
    }

    /// Add a product
    ///
    /// Validates the product, submits it to the remote catalog and keeps it
    /// locally whatever the remote outcome, then refreshes the catalog.
    #[oai(path = "/catalog/products", method = "post", tag = "ApiTags::Catalog")]
    async fn add_product(&self, body: Json<AddProductRequest>) -> AddProductResponse {
        match self.view_state.submit(body.0.into()).await {
            Ok(()) => AddProductResponse::Ok(Json(self.view_state.snapshot().into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AddProductResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogSnapshotResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
