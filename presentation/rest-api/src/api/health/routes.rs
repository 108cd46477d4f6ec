use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::application::catalog::view_state::CatalogViewState;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Number of products currently materialized for the UI
    pub products: u64,
}

/// Health API for liveness checks
pub struct Api {
    view_state: Arc<CatalogViewState>,
}

impl Api {
    pub fn new(view_state: Arc<CatalogViewState>) -> Self {
        Self { view_state }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns "healthy" while the service is running, along with the size of
    /// the current catalog snapshot.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            products: self.view_state.snapshot().products.len() as u64,
        })
    }
}
