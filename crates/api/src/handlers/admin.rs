//! Handlers for admin login, logout, and session check.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use makerslab_core::error::CoreError;
use makerslab_core::session::SessionState;
use makerslab_db::models::session::CreateSession;
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::auth::session::{
    clear_session_cookie, generate_session_token, hash_session_token, session_cookie,
    session_token,
};
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub is_authenticated: bool,
}

/// POST /api/admin/login
///
/// On success any session the caller already held is discarded and a
/// fresh one is issued.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let invalid = || AppError::BadRequest("Invalid request data".into());
    let Json(input) = payload.map_err(|_| invalid())?;
    if input.password.is_empty() {
        return Err(invalid());
    }

    let matches = verify_password(&input.password, &state.config.session.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !matches {
        tracing::warn!("Admin login rejected");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let sessions = state.store.sessions();
    if let Some(previous) = session_token(&headers) {
        sessions
            .delete_session(&hash_session_token(&previous))
            .await?;
    }

    let (token, token_hash) = generate_session_token();
    sessions
        .create_session(&CreateSession {
            token_hash,
            state: SessionState::Authenticated,
            expires_at: state.config.session.expires_at(),
        })
        .await?;
    tracing::info!("Admin logged in");

    Ok((
        [(SET_COOKIE, session_cookie(&token, state.config.session.cookie_secure))],
        Json(MessageResponse::ok("Login successful")),
    ))
}

/// POST /api/admin/logout
///
/// Always succeeds; a caller without a session is already logged out.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    if let Some(token) = session_token(&headers) {
        let removed = state
            .store
            .sessions()
            .delete_session(&hash_session_token(&token))
            .await?;
        if removed {
            tracing::info!("Admin logged out");
        }
    }

    Ok((
        [(SET_COOKIE, clear_session_cookie(state.config.session.cookie_secure))],
        Json(MessageResponse::ok("Logout successful")),
    ))
}

/// GET /api/admin/check
///
/// Reports whether the caller holds a live admin session. Has no side
/// effects; in particular it does not extend the session.
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<CheckResponse>> {
    let is_authenticated = match session_token(&headers) {
        Some(token) => state
            .store
            .sessions()
            .find_active_session(&hash_session_token(&token))
            .await?
            .is_some_and(|s| s.session_state().is_authenticated()),
        None => false,
    };
    Ok(Json(CheckResponse { is_authenticated }))
}
