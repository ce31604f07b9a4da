//! Admin session extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use makerslab_core::error::CoreError;
use makerslab_db::models::session::AdminSession;

use crate::auth::session::{hash_session_token, session_token};
use crate::error::AppError;
use crate::state::AppState;

/// Requires an authenticated admin session. Rejects with 403 Forbidden
/// otherwise, before the handler touches any content.
///
/// Every accepted request pushes the session expiry forward.
///
/// ```ignore
/// async fn create(_admin: RequireAdmin, ...) -> AppResult<...> {
///     // only reached with a live admin session
/// }
/// ```
pub struct RequireAdmin(pub AdminSession);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let forbidden = || AppError::Core(CoreError::Forbidden("Unauthorized".into()));

        let token = session_token(&parts.headers).ok_or_else(forbidden)?;
        let token_hash = hash_session_token(&token);

        let sessions = state.store.sessions();
        let session = sessions
            .find_active_session(&token_hash)
            .await?
            .filter(|s| s.session_state().is_authenticated())
            .ok_or_else(forbidden)?;

        sessions
            .touch_session(&token_hash, state.config.session.expires_at())
            .await?;

        Ok(RequireAdmin(session))
    }
}
