use std::{env, path::PathBuf, time::Duration};

use business::application::catalog::repository::DEFAULT_REMOTE_TIMEOUT;
use remote::client::DEFAULT_BASE_URL;

/// Remote catalog and image upload settings
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub image_scratch_dir: PathBuf,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_API_URL: Base URL of the remote catalog (default: "https://app.getswipe.in/api/public")
    /// - CATALOG_TIMEOUT_SECS: Remote call timeout in seconds (default: 30)
    /// - IMAGE_SCRATCH_DIR: Where content handles are materialized before upload
    ///   (default: "<system temp>/catalog-uploads")
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CATALOG_API_URL").ok(),
            env::var("CATALOG_TIMEOUT_SECS").ok(),
            env::var("IMAGE_SCRATCH_DIR").ok(),
        )
    }

    fn from_values(
        base_url: Option<String>,
        timeout_secs: Option<String>,
        scratch_dir: Option<String>,
    ) -> Self {
        let timeout = timeout_secs
            .and_then(|t| t.trim().parse::<u64>().ok())
            .filter(|t| *t > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REMOTE_TIMEOUT);

        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
            image_scratch_dir: scratch_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join("catalog-uploads")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_nothing_is_set() {
        // Act
        let config = CatalogConfig::from_values(None, None, None);

        // Assert
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.image_scratch_dir.ends_with("catalog-uploads"));
    }

    #[test]
    fn should_read_explicit_values() {
        // Act
        let config = CatalogConfig::from_values(
            Some("http://localhost:9000/api".to_string()),
            Some("5".to_string()),
            Some("/var/cache/catalog".to_string()),
        );

        // Assert
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.image_scratch_dir, PathBuf::from("/var/cache/catalog"));
    }

    #[test]
    fn should_fall_back_to_default_timeout_when_invalid() {
        // Arrange
        let values = [Some("soon".to_string()), Some("0".to_string())];

        for value in values {
            // Act
            let config = CatalogConfig::from_values(None, value, None);

            // Assert
            assert_eq!(config.timeout, DEFAULT_REMOTE_TIMEOUT);
        }
    }
}
