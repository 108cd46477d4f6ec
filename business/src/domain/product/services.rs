use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::TransportError;

use super::errors::ContentError;
use super::model::Product;
use super::value_objects::ImageMime;

/// Binary image part attached to an add-product request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub path: PathBuf,
    /// Declared format, when known. Direct file attachments are sent as-is.
    pub mime: Option<ImageMime>,
}

/// Transport-ready form of a product: text fields plus an optional image part.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSubmission {
    pub product_name: String,
    pub product_type: String,
    pub price: String,
    pub tax: String,
    pub image: Option<ImageAttachment>,
}

impl ProductSubmission {
    pub fn from_product(product: &Product, image: Option<ImageAttachment>) -> Self {
        Self {
            product_name: product.name.clone(),
            product_type: product.product_type.clone(),
            price: product.price.to_string(),
            tax: product.tax.to_string(),
            image,
        }
    }
}

/// Decoded response of a successful add-product call.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProductReceipt {
    pub message: String,
    pub product_id: i64,
    pub product_details: Product,
    pub success: bool,
}

/// Port for the remote catalog service.
#[async_trait]
pub trait RemoteCatalogClient: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, TransportError>;
    async fn add(&self, submission: &ProductSubmission) -> Result<AddProductReceipt, TransportError>;
}

/// Bytes behind an opaque content handle together with its declared MIME type.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContent {
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Port for opening image references that are not plain filesystem paths.
#[async_trait]
pub trait ContentResolver: Send + Sync {
    async fn open(&self, handle: &str) -> Result<ResolvedContent, ContentError>;
}
