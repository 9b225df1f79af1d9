use async_trait::async_trait;
use bytes::Bytes;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::region::Region;

use super::{guess_content_type, ObjectStore, ObjectStoreError, StoredObject};
use crate::config::S3Config;

/// S3-compatible bucket backend (AWS, MinIO, R2, ...).
pub struct S3Store {
    bucket: Box<Bucket>,
}

impl S3Store {
    pub fn new(config: &S3Config) -> Result<Self, anyhow::Error> {
        // A custom endpoint almost always means a self-hosted store, which
        // rarely supports virtual-host addressing.
        let (region, path_style) = match config.endpoint {
            Some(ref endpoint) => (
                Region::Custom {
                    region: config.region.clone(),
                    endpoint: endpoint.clone(),
                },
                true,
            ),
            None => (
                Region::Custom {
                    region: config.region.clone(),
                    endpoint: format!("https://s3.{}.amazonaws.com", config.region),
                },
                false,
            ),
        };

        let credentials = Credentials::new(
            config.access_key_id.as_deref(),
            config.secret_access_key.as_deref(),
            None,
            None,
            None,
        )?;

        let bucket = Bucket::new(&config.bucket, region, credentials)?;
        let bucket = if path_style {
            bucket.with_path_style()
        } else {
            bucket
        };

        Ok(Self { bucket })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get(&self, key: &str) -> Result<StoredObject, ObjectStoreError> {
        let response = self
            .bucket
            .get_object(key)
            .await
            .map_err(|e| ObjectStoreError::Backend(e.to_string()))?;

        match response.status_code() {
            200..=299 => {}
            404 => return Err(ObjectStoreError::NotFound(key.to_string())),
            status => {
                return Err(ObjectStoreError::Backend(format!(
                    "S3 download failed ({status}): {}",
                    String::from_utf8_lossy(response.as_slice())
                )));
            }
        }

        let content_type = response
            .headers()
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.clone())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| guess_content_type(key));

        Ok(StoredObject {
            content_type,
            data: response.bytes().clone(),
        })
    }

    async fn put(
        &self,
        key: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<(), ObjectStoreError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| ObjectStoreError::Backend(e.to_string()))?;

        if !(200..300).contains(&response.status_code()) {
            return Err(ObjectStoreError::Backend(format!(
                "S3 upload failed ({}): {}",
                response.status_code(),
                String::from_utf8_lossy(response.as_slice())
            )));
        }

        Ok(())
    }
}
