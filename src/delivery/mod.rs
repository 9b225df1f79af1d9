//! Resolve a public id to a stored file and decide how to deliver it.
//!
//! A request runs through four steps, each of which may end it early:
//! resolve the id (alias first, then the literal filename), look up the file
//! record, fetch the object, and shape the response.

mod fetch;
mod resolve;
mod shape;

pub use fetch::fetch_object;
pub use resolve::{lookup_file, resolve_filename};
pub use shape::{display_date, shape, Delivery, EmbedFields, EmbedView, LinkView};

use thiserror::Error;

use crate::storage::DatabaseError;

pub const MISSING_ID: &str = "Provide a file id.";
pub const INVALID_FILE: &str = "invalid file";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Provide a file id.")]
    BadRequest,
    #[error("invalid file")]
    NotFound,
    #[error("{0}")]
    Upstream(String),
    #[error("metadata store error: {0}")]
    Store(#[from] DatabaseError),
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}
