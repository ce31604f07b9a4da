use axum::routing::get;
use axum::Router;

use crate::handlers::files;
use crate::state::AppState;

/// Mount upload file routes (root-level, NOT under `/api`).
///
/// ```text
/// GET    /uploads/{*path}   -> serve_local
/// GET    /objects/{*path}   -> serve_object
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/uploads/{*path}", get(files::serve_local))
        .route("/objects/{*path}", get(files::serve_object))
}
