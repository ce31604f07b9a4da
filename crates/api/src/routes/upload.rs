use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use makerslab_core::upload::{MAX_UPLOAD_BYTES, MULTIPART_OVERHEAD_BYTES};

use crate::handlers::upload;
use crate::state::AppState;

/// ```text
/// POST   /upload   -> upload_image
/// ```
///
/// The body limit leaves room for multipart framing around a maximum-size
/// image; the handler enforces the exact file size.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload::upload_image)
            .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
    )
}
