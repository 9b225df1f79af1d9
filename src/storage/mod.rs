pub mod db;
mod files;
mod invisible_urls;
pub mod models;
mod tables;

pub use db::{Database, DatabaseError, PurgeStats};
pub use tables::*;
