use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};

use super::{guess_content_type, ObjectStore, ObjectStoreError, StoredObject};

/// Local filesystem object store for development and testing.
///
/// The filesystem keeps no content type, so it is guessed from the key's
/// extension on read.
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, std::io::Error> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Map a key onto a path under the base directory. Keys that would
    /// escape it (`..`, absolute paths) are rejected.
    fn object_path(&self, key: &str) -> Result<PathBuf, ObjectStoreError> {
        let relative = Path::new(key);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(ObjectStoreError::NotFound(key.to_string()));
        }
        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl ObjectStore for LocalStore {
    async fn get(&self, key: &str) -> Result<StoredObject, ObjectStoreError> {
        let path = self.object_path(key)?;
        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ObjectStoreError::NotFound(key.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(StoredObject {
            content_type: guess_content_type(key),
            data: Bytes::from(data),
        })
    }

    async fn put(
        &self,
        key: &str,
        _content_type: &str,
        data: Bytes,
    ) -> Result<(), ObjectStoreError> {
        let path = self.object_path(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &data).await?;
        Ok(())
    }
}
