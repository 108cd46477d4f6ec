use serde::{Deserialize, Deserializer};

use business::domain::errors::TransportError;
use business::domain::product::model::Product;
use business::domain::product::services::AddProductReceipt;

/// Product as it travels on the wire. The server carries no local identity.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub price: f64,
    pub product_name: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub tax: f64,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product {
            id: None,
            name: self.product_name,
            product_type: self.product_type,
            price: self.price,
            tax: self.tax,
            image: self.image.filter(|i| !i.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddProductResponseDto {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub product_details: Option<ProductDto>,
    #[serde(default)]
    pub product_id: i64,
    pub success: bool,
}

impl AddProductResponseDto {
    pub fn into_receipt(self) -> Result<AddProductReceipt, TransportError> {
        if !self.success {
            return Err(TransportError::Rejected(self.message));
        }
        let details = self.product_details.ok_or(TransportError::decode())?;

        Ok(AddProductReceipt {
            message: self.message,
            product_id: self.product_id,
            product_details: details.into_domain(),
            success: true,
        })
    }
}

/// Accepts `12.5` as well as `"12.5"`; the add endpoint echoes form fields back as text.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
