use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::product::model::Product;

/// Materialized catalog state exposed to the UI.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    /// When the product list was last re-materialized.
    pub updated_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    /// Keeps the current products while a refresh is in flight.
    pub fn loading_from(previous: &CatalogSnapshot) -> Self {
        Self {
            products: previous.products.clone(),
            loading: true,
            error: None,
            updated_at: previous.updated_at,
        }
    }

    pub fn loaded(products: Vec<Product>, error: Option<String>) -> Self {
        Self {
            products,
            loading: false,
            error,
            updated_at: Some(Utc::now()),
        }
    }

    /// Same products, different error slot.
    pub fn with_error(previous: &CatalogSnapshot, error: impl Into<String>) -> Self {
        Self {
            products: previous.products.clone(),
            loading: false,
            error: Some(error.into()),
            updated_at: previous.updated_at,
        }
    }

    /// Products whose name contains `query`, ignoring case. A blank query keeps every product.
    pub fn filtered(&self, query: &str) -> Self {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.clone();
        }

        Self {
            products: self
                .products
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}
