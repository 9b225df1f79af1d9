use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::models::InvisibleUrl;
use super::tables::*;

impl Database {
    // ========================================================================
    // Invisible URL operations
    // ========================================================================

    pub fn put_invisible_url(&self, alias: &InvisibleUrl) -> Result<(), DatabaseError> {
        debug_assert!(!alias.id.is_empty(), "invisible url id must not be empty");

        let write_txn = self.begin_write()?;
        {
            let mut table = write_txn.open_table(INVISIBLE_URLS)?;
            let data = rmp_serde::to_vec_named(alias)?;
            table.insert(alias.id.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get an invisible URL by its public id
    pub fn get_invisible_url(&self, id: &str) -> Result<Option<InvisibleUrl>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(INVISIBLE_URLS)?;

        match table.get(id)? {
            Some(data) => Ok(Some(rmp_serde::from_slice(data.value())?)),
            None => Ok(None),
        }
    }

    /// All invisible URLs that point at `filename`.
    ///
    /// Scans the whole table; aliases are few per file and this is never on
    /// the request path.
    pub fn get_invisible_urls_for(
        &self,
        filename: &str,
    ) -> Result<Vec<InvisibleUrl>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(INVISIBLE_URLS)?;

        let mut aliases = Vec::new();
        for entry in table.iter()? {
            let (_, data) = entry?;
            let alias: InvisibleUrl = rmp_serde::from_slice(data.value())?;
            if alias.filename == filename {
                aliases.push(alias);
            }
        }
        Ok(aliases)
    }

    pub fn delete_invisible_url(&self, id: &str) -> Result<bool, DatabaseError> {
        let write_txn = self.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(INVISIBLE_URLS)?;
            let removed = table.remove(id)?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(removed)
    }
}
