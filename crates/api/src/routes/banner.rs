use axum::routing::get;
use axum::Router;

use crate::handlers::banner;
use crate::state::AppState;

/// ```text
/// GET    /construction-banner   -> get
/// PUT    /construction-banner   -> upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/construction-banner", get(banner::get).put(banner::upsert))
}
