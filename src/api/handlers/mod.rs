mod admin;
mod serve;

use crate::api::response::ApiError;
use crate::delivery::{DeliveryError, INVALID_FILE, MISSING_ID};

pub use admin::health;
pub use serve::{serve_file, serve_root};

/// Map a DeliveryError to an ApiError.
///
/// Store and render failures never reach the client in detail. Upstream
/// messages only do when `expose_upstream` is set.
fn delivery_error(e: DeliveryError, expose_upstream: bool) -> ApiError {
    match e {
        DeliveryError::BadRequest => ApiError::bad_request(MISSING_ID),
        DeliveryError::NotFound => ApiError::not_found(INVALID_FILE),
        DeliveryError::Upstream(message) if expose_upstream => ApiError::internal(message),
        DeliveryError::Upstream(_) => ApiError::internal("Failed to retrieve file"),
        DeliveryError::Store(_) | DeliveryError::Render(_) => {
            tracing::error!(error = %e, "File delivery failed");
            ApiError::internal("Internal server error")
        }
    }
}
