//! file-relay - serves stored files by public id
//!
//! A request for `/{id}` is resolved through an optional invisible-URL alias
//! to a file record, the object is fetched from the configured object store,
//! and the response is either the raw bytes or an HTML preview page:
//! - Swappable object storage backends (local filesystem, S3-compatible)
//! - redb embedded database for file and alias metadata
//! - handlebars views for embed and link previews

pub mod api;
pub mod config;
pub mod delivery;
pub mod object_store;
pub mod storage;
#[cfg(test)]
pub mod testutil;
pub mod views;

use std::sync::Arc;

use config::Config;
use storage::Database;
use views::Views;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub object_store: Arc<dyn object_store::ObjectStore>,
    pub views: Views,
}
