use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::models::FileRecord;
use super::tables::*;

impl Database {
    /// Store a file record, replacing any existing record with the same filename
    pub fn put_file(&self, file: &FileRecord) -> Result<(), DatabaseError> {
        debug_assert!(!file.filename.is_empty(), "filename must not be empty");

        let write_txn = self.begin_write()?;
        {
            let mut table = write_txn.open_table(FILES)?;
            let data = rmp_serde::to_vec_named(file)?;
            table.insert(file.filename.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get a file by its filename
    pub fn get_file(&self, filename: &str) -> Result<Option<FileRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(FILES)?;

        match table.get(filename)? {
            Some(data) => {
                let file: FileRecord = rmp_serde::from_slice(data.value())?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// Delete a file record. Invisible URLs pointing at it are left in place
    /// and will resolve as not found.
    pub fn delete_file(&self, filename: &str) -> Result<bool, DatabaseError> {
        let write_txn = self.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(FILES)?;
            let removed = table.remove(filename)?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(removed)
    }
}
