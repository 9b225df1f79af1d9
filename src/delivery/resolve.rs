use super::DeliveryError;
use crate::storage::models::FileRecord;
use crate::storage::Database;

/// Map a public id to the filename to look up.
///
/// An invisible URL with that id wins; otherwise the id is the filename. The
/// id is opaque and used as given, surrounding whitespace included. A failing
/// alias lookup is treated the same as a missing alias.
pub fn resolve_filename(db: &Database, id: &str) -> Result<String, DeliveryError> {
    if id.trim().is_empty() {
        return Err(DeliveryError::BadRequest);
    }

    match db.get_invisible_url(id) {
        Ok(Some(alias)) => {
            tracing::debug!(id = %id, filename = %alias.filename, "Resolved invisible url");
            Ok(alias.filename)
        }
        Ok(None) => Ok(id.to_string()),
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "Invisible url lookup failed, using id as filename");
            Ok(id.to_string())
        }
    }
}

/// Fetch the file record for `filename`; absence is `NotFound`.
pub fn lookup_file(db: &Database, filename: &str) -> Result<FileRecord, DeliveryError> {
    db.get_file(filename)?.ok_or(DeliveryError::NotFound)
}
