use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use business::domain::errors::TransportError;
use business::domain::product::model::Product;
use business::domain::product::services::{
    AddProductReceipt, ImageAttachment, ProductSubmission, RemoteCatalogClient,
};

use crate::client::CatalogHttpClient;
use crate::dto::{AddProductResponseDto, ProductDto};

const IMAGE_FIELD: &str = "files[]";
const IMAGE_CONTENT_TYPE: &str = "image/*";

pub struct RemoteCatalogClientHttp {
    client: CatalogHttpClient,
}

impl RemoteCatalogClientHttp {
    pub fn new(client: CatalogHttpClient) -> Self {
        Self { client }
    }

    async fn form(submission: &ProductSubmission) -> Form {
        let form = Form::new()
            .text("product_name", submission.product_name.clone())
            .text("product_type", submission.product_type.clone())
            .text("price", submission.price.clone())
            .text("tax", submission.tax.clone());

        match &submission.image {
            Some(image) => match Self::image_part(image).await {
                Some(part) => form.part(IMAGE_FIELD, part),
                None => form,
            },
            None => form,
        }
    }

    /// An unreadable attachment is dropped rather than failing the request.
    /// Attachments of unknown format go out as `image/*`.
    async fn image_part(image: &ImageAttachment) -> Option<Part> {
        let bytes = match tokio::fs::read(&image.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %image.path.display(), error = %e, "cannot read image attachment");
                return None;
            }
        };

        let content_type = image
            .mime
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| IMAGE_CONTENT_TYPE.to_string());

        Part::bytes(bytes)
            .file_name(image.file_name.clone())
            .mime_str(&content_type)
            .ok()
    }
}

fn map_send_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout()
    } else if error.is_decode() {
        TransportError::decode()
    } else {
        TransportError::unreachable()
    }
}

#[async_trait]
impl RemoteCatalogClient for RemoteCatalogClientHttp {
    async fn list(&self) -> Result<Vec<Product>, TransportError> {
        let response = self
            .client
            .client
            .get(self.client.list_url())
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(TransportError::UnexpectedStatus(response.status().as_u16()));
        }

        let products: Vec<ProductDto> = response
            .json()
            .await
            .map_err(|_| TransportError::decode())?;

        Ok(products.into_iter().map(ProductDto::into_domain).collect())
    }

    async fn add(
        &self,
        submission: &ProductSubmission,
    ) -> Result<AddProductReceipt, TransportError> {
        let form = Self::form(submission).await;

        let response = self
            .client
            .client
            .post(self.client.add_url())
            .multipart(form)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, body = %body, "catalog rejected add request");
            return Err(TransportError::UnexpectedStatus(status));
        }

        let body: AddProductResponseDto = response
            .json()
            .await
            .map_err(|_| TransportError::decode())?;

        body.into_receipt()
    }
}
