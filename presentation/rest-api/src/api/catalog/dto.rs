use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::catalog::snapshot::CatalogSnapshot;
use business::domain::product::model::{NewProductProps, Product};

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Local identity, present once the product is cached on this device
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Product name
    pub product_name: String,
    /// Free-text category
    pub product_type: String,
    /// Unit price
    pub price: f64,
    /// Tax rate
    pub tax: f64,
    /// Image URL, local path or content handle
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_name: product.name,
            product_type: product.product_type,
            price: product.price,
            tax: product.tax,
            image: product.image,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddProductRequest {
    /// Product name (cannot be empty)
    pub product_name: String,
    /// Free-text category
    #[oai(default)]
    pub product_type: String,
    /// Unit price (must be greater than 0)
    pub price: f64,
    /// Tax rate (cannot be negative)
    #[oai(default)]
    pub tax: f64,
    /// Optional image: a file path, `file://` URI or `data:image/...;base64,` URI
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

impl From<AddProductRequest> for Product {
    fn from(request: AddProductRequest) -> Self {
        Product::new(NewProductProps {
            name: request.product_name,
            product_type: request.product_type,
            price: request.price,
            tax: request.tax,
            image: request.image,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogSnapshotResponse {
    /// Products in display order
    pub products: Vec<ProductResponse>,
    /// Whether a refresh is in flight
    pub loading: bool,
    /// Error or advisory message for the user
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
    /// When the product list was last re-materialized
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CatalogSnapshot> for CatalogSnapshotResponse {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self {
            products: snapshot.products.into_iter().map(|p| p.into()).collect(),
            loading: snapshot.loading,
            error: snapshot.error,
            updated_at: snapshot.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_unsaved_draft_from_request() {
        let request = AddProductRequest {
            product_name: "Pen".to_string(),
            product_type: "stationery".to_string(),
            price: 10.0,
            tax: 1.0,
            image: Some("".to_string()),
        };

        let product: Product = request.into();

        assert_eq!(product.id, None);
        assert_eq!(product.name, "Pen");
        assert_eq!(product.image, None);
    }

    #[test]
    fn should_expose_snapshot_fields() {
        let snapshot = CatalogSnapshot {
            products: vec![Product::from_repository(
                3,
                "Ink".to_string(),
                "stationery".to_string(),
                4.5,
                0.0,
                None,
            )],
            loading: false,
            error: Some("Showing cached products: transport.unreachable".to_string()),
            updated_at: None,
        };

        let response: CatalogSnapshotResponse = snapshot.into();

        assert_eq!(response.products.len(), 1);
        assert_eq!(response.products[0].id, Some(3));
        assert_eq!(response.products[0].product_name, "Ink");
        assert!(!response.loading);
        assert!(response.error.is_some());
    }
}
