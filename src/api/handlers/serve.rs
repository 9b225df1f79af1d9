use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use super::delivery_error;
use crate::api::response::ApiError;
use crate::delivery::{
    fetch_object, lookup_file, resolve_filename, shape, Delivery, DeliveryError, MISSING_ID,
};
use crate::object_store::StoredObject;
use crate::views::View;
use crate::AppState;

/// Serve a file (or its preview page) by public id or invisible URL.
/// Route: GET /:id
pub async fn serve_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    deliver(&state, &id)
        .await
        .map_err(|e| delivery_error(e, state.config.delivery.expose_upstream_errors))
}

/// Route: GET /
pub async fn serve_root(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    match state.config.delivery.root_redirect_url {
        Some(ref url) => {
            Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, url.as_str())]).into_response())
        }
        None => Err(ApiError::bad_request(MISSING_ID)),
    }
}

async fn deliver(state: &AppState, id: &str) -> Result<Response, DeliveryError> {
    let filename = resolve_filename(&state.db, id)?;
    let file = lookup_file(&state.db, &filename)?;

    let object = fetch_object(
        state.object_store.as_ref(),
        &file,
        state.config.delivery.upstream_timeout,
    )
    .await?;

    let delivery = shape(&file, &state.config.delivery.cdn_base_url);
    tracing::debug!(id = %id, filename = %file.filename, delivery = ?delivery, "Delivering file");

    let response = match delivery {
        Delivery::Raw => raw_response(object),
        Delivery::Embed(view) => Html(state.views.render(View::EmbedFile, &view)?).into_response(),
        Delivery::Link(view) => Html(state.views.render(View::File, &view)?).into_response(),
    };
    Ok(response)
}

fn raw_response(object: StoredObject) -> Response {
    let mut response = (StatusCode::OK, object.data).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        object
            .content_type
            .parse()
            .unwrap_or(header::HeaderValue::from_static("application/octet-stream")),
    );
    response
}
