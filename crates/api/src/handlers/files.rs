//! Serving stored uploads back to browsers.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use makerslab_core::error::CoreError;
use makerslab_storage::{BlobStore, StorageError};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /uploads/{*path}
///
/// Files saved to the local upload directory, including references written
/// before object storage was configured.
pub async fn serve_local(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> AppResult<Response> {
    serve(&*state.local_uploads, &path).await
}

/// GET /objects/{*path}
pub async fn serve_object(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> AppResult<Response> {
    serve(&*state.uploads, &path).await
}

async fn serve(store: &dyn BlobStore, key: &str) -> AppResult<Response> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "File",
            id: key.to_string(),
        })
    };

    let blob = match store.get(key).await {
        Ok(Some(blob)) => blob,
        Ok(None) | Err(StorageError::InvalidKey(_)) => return Err(not_found()),
        Err(e) => return Err(e.into()),
    };

    Ok((
        [
            (CONTENT_TYPE, blob.content_type),
            (CACHE_CONTROL, "public, max-age=31536000, immutable".to_string()),
        ],
        Body::from(blob.bytes),
    )
        .into_response())
}
