use serde::Serialize;

use super::errors::ValidationError;

/// A catalog entry.
///
/// `id` is the local identity and is only present once the local store has
/// persisted the product. Products coming from the remote catalog carry none.
/// `image` holds a local path or content handle while the product is a draft,
/// and a remote URL once it has been fetched from the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub product_type: String,
    pub price: f64,
    pub tax: f64,
    pub image: Option<String>,
}

pub struct NewProductProps {
    pub name: String,
    pub product_type: String,
    pub price: f64,
    pub tax: f64,
    pub image: Option<String>,
}

impl Product {
    /// Creates an unsaved draft. Validation happens when the draft is added.
    pub fn new(props: NewProductProps) -> Self {
        Self {
            id: None,
            name: props.name,
            product_type: props.product_type,
            price: props.price,
            tax: props.tax,
            image: props.image.filter(|i| !i.trim().is_empty()),
        }
    }

    /// Constructor for data already persisted in the local store (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        product_type: String,
        price: f64,
        tax: f64,
        image: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            product_type,
            price,
            tax,
            image,
        }
    }

    /// Checks the invariants required before any write is attempted.
    ///
    /// Rules are checked in order: name, then price, then tax. NaN prices and
    /// taxes are rejected since they compare false against every bound.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.price.is_nan() || self.price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }
        if self.tax.is_nan() || self.tax < 0.0 {
            return Err(ValidationError::NegativeTax);
        }
        Ok(())
    }
}
