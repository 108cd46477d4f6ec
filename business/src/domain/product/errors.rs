/// Pre-flight validation failures for a product about to be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product.name_empty")]
    EmptyName,
    #[error("product.non_positive_price")]
    NonPositivePrice,
    #[error("product.negative_tax")]
    NegativeTax,
}

impl ValidationError {
    /// Human-readable text shown in the catalog's error slot.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "Product name cannot be empty",
            ValidationError::NonPositivePrice => "Price must be greater than 0",
            ValidationError::NegativeTax => "Tax cannot be negative",
        }
    }
}

/// Failures while opening an opaque content handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content.not_found")]
    NotFound,
    #[error("content.unreadable")]
    Unreadable,
    #[error("content.unsupported_handle")]
    UnsupportedHandle,
}
