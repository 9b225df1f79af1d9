mod bucket;
mod local;

pub use bucket::S3Store;
pub use local::LocalStore;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Object not found: {0}")]
    NotFound(String),
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Bytes plus the content type the backend declared for them.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub content_type: String,
    pub data: Bytes,
}

/// Abstraction over object storage backends.
/// Keys are `{uploader uid}/{filename}`.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<StoredObject, ObjectStoreError>;
    async fn put(&self, key: &str, content_type: &str, data: Bytes)
        -> Result<(), ObjectStoreError>;
}

/// Content type to report when a backend has none on record for `key`.
pub(crate) fn guess_content_type(key: &str) -> String {
    mime_guess::from_path(key)
        .first()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}
