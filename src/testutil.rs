//! Shared test helpers: app state over a temporary database, sample records
//! and in-memory object stores.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{TimeZone, Utc};

use crate::config::{Config, DeliveryConfig, NodeConfig, StorageConfig};
use crate::object_store::{ObjectStore, ObjectStoreError, StoredObject};
use crate::storage::models::{DisplayType, EmbedSettings, FileRecord, Uploader};
use crate::storage::Database;
use crate::views::Views;
use crate::AppState;

/// Create a test AppState with a temporary database and the given object store.
pub fn test_state(
    temp_dir: &tempfile::TempDir,
    object_store: Arc<dyn ObjectStore>,
    delivery: DeliveryConfig,
) -> Arc<AppState> {
    let data_dir = temp_dir.path().join("data");

    let config = Config {
        node: NodeConfig {
            bind_address: "127.0.0.1:0".to_string(),
            data_dir: data_dir.to_string_lossy().to_string(),
        },
        delivery,
        storage: StorageConfig::default(),
    };

    let db = Database::open(&data_dir).expect("Failed to open test database");
    let views = Views::new().expect("Failed to load views");

    Arc::new(AppState {
        config,
        db,
        object_store,
        views,
    })
}

/// A plain image owned by `alice` (uid `u-42`).
pub fn sample_file(filename: &str, mimetype: &str) -> FileRecord {
    FileRecord {
        filename: filename.to_string(),
        mimetype: mimetype.to_string(),
        uploader: Uploader {
            uid: "u-42".to_string(),
            username: "alice".to_string(),
        },
        date_uploaded: Utc.with_ymd_and_hms(2021, 3, 2, 14, 5, 9).unwrap(),
        display_type: DisplayType::Raw,
        show_link: false,
        embed: EmbedSettings::default(),
    }
}

/// In-memory store that remembers every key it was asked for.
#[derive(Default)]
pub struct RecordingStore {
    objects: Mutex<HashMap<String, StoredObject>>,
    requested: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, content_type: &str, data: &'static str) {
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                data: Bytes::from_static(data.as_bytes()),
            },
        );
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn get(&self, key: &str) -> Result<StoredObject, ObjectStoreError> {
        self.requested.lock().unwrap().push(key.to_string());
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| ObjectStoreError::NotFound(key.to_string()))
    }

    async fn put(
        &self,
        key: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<(), ObjectStoreError> {
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                data,
            },
        );
        Ok(())
    }
}

/// Store whose every call fails with a backend error.
pub struct FailingStore(String);

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

#[async_trait]
impl ObjectStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<StoredObject, ObjectStoreError> {
        Err(ObjectStoreError::Backend(self.0.clone()))
    }

    async fn put(
        &self,
        _key: &str,
        _content_type: &str,
        _data: Bytes,
    ) -> Result<(), ObjectStoreError> {
        Err(ObjectStoreError::Backend(self.0.clone()))
    }
}

/// Store that never answers within the given delay.
pub struct SlowStore(pub Duration);

#[async_trait]
impl ObjectStore for SlowStore {
    async fn get(&self, key: &str) -> Result<StoredObject, ObjectStoreError> {
        tokio::time::sleep(self.0).await;
        Err(ObjectStoreError::NotFound(key.to_string()))
    }

    async fn put(
        &self,
        _key: &str,
        _content_type: &str,
        _data: Bytes,
    ) -> Result<(), ObjectStoreError> {
        tokio::time::sleep(self.0).await;
        Ok(())
    }
}
