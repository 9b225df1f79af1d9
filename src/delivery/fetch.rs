use std::time::Duration;

use super::DeliveryError;
use crate::object_store::{ObjectStore, ObjectStoreError, StoredObject};
use crate::storage::models::FileRecord;

/// Fetch the object backing `file` from `{uploader.uid}/{filename}`.
///
/// Every failure, including a missing object or a timeout, is `Upstream`.
pub async fn fetch_object(
    store: &dyn ObjectStore,
    file: &FileRecord,
    timeout: Duration,
) -> Result<StoredObject, DeliveryError> {
    let key = file.object_key();

    match tokio::time::timeout(timeout, store.get(&key)).await {
        Ok(Ok(object)) => Ok(object),
        Ok(Err(e)) => {
            tracing::error!(key = %key, error = %e, "Object store fetch failed");
            let message = match e {
                ObjectStoreError::Backend(message) => message,
                other => other.to_string(),
            };
            Err(DeliveryError::Upstream(message))
        }
        Err(_) => {
            tracing::error!(
                key = %key,
                timeout_ms = timeout.as_millis() as u64,
                "Object store fetch timed out"
            );
            Err(DeliveryError::Upstream(
                "object store request timed out".to_string(),
            ))
        }
    }
}
