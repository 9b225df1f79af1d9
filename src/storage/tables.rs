use redb::TableDefinition;

/// File records: filename -> FileRecord (msgpack)
pub const FILES: TableDefinition<&str, &[u8]> = TableDefinition::new("files");

/// Invisible URLs: alias id -> InvisibleUrl (msgpack)
pub const INVISIBLE_URLS: TableDefinition<&str, &[u8]> = TableDefinition::new("invisible_urls");
