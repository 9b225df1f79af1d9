use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub node: NodeConfig,
    pub delivery: DeliveryConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_address: String,
    pub data_dir: String,
}

#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    /// Public base URL objects are reachable at, without trailing slash.
    pub cdn_base_url: String,
    /// Where `GET /` redirects. When unset, `/` is a missing-id request.
    pub root_redirect_url: Option<String>,
    /// Send object store error text to clients verbatim instead of a generic message.
    pub expose_upstream_errors: bool,
    pub upstream_timeout: Duration,
}

#[derive(Debug, Clone)]
pub enum StorageBackend {
    Local,
    S3,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for local storage backend
    pub local_storage_path: String,
    /// Required when backend is s3
    pub s3: Option<S3Config>,
}

#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible stores; implies path-style addressing.
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: "https://cdn.astral.cool".to_string(),
            root_redirect_url: None,
            expose_upstream_errors: false,
            upstream_timeout: Duration::from_secs(10),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Local,
            local_storage_path: "./files".to_string(),
            s3: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let defaults = DeliveryConfig::default();

        let cdn_base_url = std::env::var("CDN_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.cdn_base_url);

        let root_redirect_url = std::env::var("ROOT_REDIRECT_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let expose_upstream_errors = std::env::var("EXPOSE_UPSTREAM_ERRORS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let upstream_timeout = std::env::var("UPSTREAM_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.upstream_timeout);

        let storage_backend = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .to_lowercase()
            .as_str()
        {
            "s3" => StorageBackend::S3,
            _ => StorageBackend::Local,
        };

        let local_storage_path =
            std::env::var("LOCAL_STORAGE_PATH").unwrap_or_else(|_| "./files".to_string());

        let s3 = std::env::var("S3_BUCKET").ok().map(|bucket| S3Config {
            bucket,
            region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint: std::env::var("S3_ENDPOINT").ok(),
            access_key_id: std::env::var("S3_ACCESS_KEY_ID").ok(),
            secret_access_key: std::env::var("S3_SECRET_ACCESS_KEY").ok(),
        });

        let config = Config {
            node: NodeConfig {
                bind_address,
                data_dir,
            },
            delivery: DeliveryConfig {
                cdn_base_url,
                root_redirect_url,
                expose_upstream_errors,
                upstream_timeout,
            },
            storage: StorageConfig {
                backend: storage_backend,
                local_storage_path,
                s3,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let cdn = &self.delivery.cdn_base_url;
        if !(cdn.starts_with("http://") || cdn.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "CDN_BASE_URL must be an http(s) URL, got '{cdn}'"
            )));
        }

        if self.delivery.upstream_timeout.is_zero() {
            return Err(ConfigError::ValidationError(
                "UPSTREAM_TIMEOUT_MS must be greater than 0".to_string(),
            ));
        }

        if matches!(self.storage.backend, StorageBackend::S3) && self.storage.s3.is_none() {
            return Err(ConfigError::ValidationError(
                "S3_BUCKET is required when STORAGE_BACKEND=s3".to_string(),
            ));
        }

        if self.delivery.expose_upstream_errors {
            tracing::warn!(
                "EXPOSE_UPSTREAM_ERRORS is enabled; object store error text will be sent to clients."
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            node: NodeConfig {
                bind_address: "127.0.0.1:0".to_string(),
                data_dir: "./data".to_string(),
            },
            delivery: DeliveryConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_cdn() {
        let mut config = config();
        config.delivery.cdn_base_url = "cdn.example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = config();
        config.delivery.upstream_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_s3_backend_requires_bucket() {
        let mut config = config();
        config.storage.backend = StorageBackend::S3;
        assert!(config.validate().is_err());

        config.storage.s3 = Some(S3Config {
            bucket: "uploads".to_string(),
            region: "us-east-1".to_string(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
        });
        assert!(config.validate().is_ok());
    }
}
