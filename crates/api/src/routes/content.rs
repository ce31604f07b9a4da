//! Route definitions shared by the content collections.

use axum::routing::get;
use axum::Router;
use makerslab_db::models::ContentEntity;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/{collection}`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router<E: ContentEntity>() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list::<E>).post(content::create::<E>))
        .route(
            "/{id}",
            get(content::get_by_id::<E>)
                .put(content::update::<E>)
                .delete(content::delete::<E>),
        )
}
