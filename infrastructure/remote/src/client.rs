use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://app.getswipe.in/api/public";

/// Shared HTTP client configuration for the remote catalog.
pub struct CatalogHttpClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogHttpClient {
    /// Builds the client with a per-request timeout.
    ///
    /// # Errors
    /// Returns the builder error when the TLS backend cannot be initialized
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the product listing endpoint URL.
    pub fn list_url(&self) -> String {
        format!("{}/get", self.base_url)
    }

    /// Returns the add-product endpoint URL.
    pub fn add_url(&self) -> String {
        format!("{}/add", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls_from_base() {
        let client = CatalogHttpClient::new(DEFAULT_BASE_URL, Duration::from_secs(5)).unwrap();

        assert_eq!(client.list_url(), "https://app.getswipe.in/api/public/get");
        assert_eq!(client.add_url(), "https://app.getswipe.in/api/public/add");
    }

    #[test]
    fn should_ignore_trailing_slash_in_base_url() {
        let client = CatalogHttpClient::new("http://localhost:9000/api/", Duration::from_secs(5)).unwrap();

        assert_eq!(client.list_url(), "http://localhost:9000/api/get");
    }

    #[test]
    fn should_build_client_with_request_timeout() {
        let result = CatalogHttpClient::new(DEFAULT_BASE_URL, Duration::from_millis(250));

        assert!(result.is_ok());
    }
}
