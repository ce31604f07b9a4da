use axum::routing::get;
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// ```text
/// POST   /contact      -> submit_contact
/// GET    /contact      -> list_contacts (admin)
/// POST   /newsletter   -> subscribe
/// GET    /newsletter   -> list_signups (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/contact",
            get(inquiry::list_contacts).post(inquiry::submit_contact),
        )
        .route(
            "/newsletter",
            get(inquiry::list_signups).post(inquiry::subscribe),
        )
}
