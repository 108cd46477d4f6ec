use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub product_name: String,
    pub product_type: String,
    pub price: f64,
    pub tax: f64,
    pub image: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.product_name,
            self.product_type,
            self.price,
            self.tax,
            Some(self.image).filter(|i| !i.is_empty()),
        )
    }
}

/// Column value for a product's image; the table stores "no image" as an empty string.
pub fn image_column(product: &Product) -> &str {
    product.image.as_deref().unwrap_or_default()
}
