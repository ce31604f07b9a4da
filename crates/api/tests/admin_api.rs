//! HTTP-level tests for the admin session gate.
//!
//! Covers login, logout, session check, rotation on re-login, expiry,
//! and sliding renewal on gated requests.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_json, build_test_app, get, get_with_cookie, login, post_json, post_json_auth,
    set_cookie_pair, ADMIN_PASSWORD,
};
use makerslab_api::auth::session::hash_session_token;
use makerslab_core::session::{SessionState, SESSION_COOKIE_NAME};
use makerslab_db::models::session::CreateSession;
use makerslab_db::store::ContentStore;
use serde_json::json;

/// Plant a session directly in the store and return its cookie.
async fn plant_session(app: &common::TestApp, token: &str, expires_in: Duration) -> String {
    app.store
        .sessions()
        .create_session(&CreateSession {
            token_hash: hash_session_token(token),
            state: SessionState::Authenticated,
            expires_at: Utc::now() + expires_in,
        })
        .await
        .expect("session insert should succeed");
    format!("{SESSION_COOKIE_NAME}={token}")
}

async fn session_expiry(app: &common::TestApp, token_hash: &str) -> chrono::DateTime<Utc> {
    app.store
        .sessions()
        .find_active_session(token_hash)
        .await
        .unwrap()
        .expect("session should be live")
        .expires_at
}

async fn is_authenticated(app: &common::TestApp, cookie: Option<&str>) -> bool {
    let response = match cookie {
        Some(cookie) => get_with_cookie(app.app(), "/api/admin/check", cookie).await,
        None => get(app.app(), "/api/admin/check").await,
    };
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["isAuthenticated"]
        .as_bool()
        .expect("isAuthenticated should be a bool")
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_success_sets_http_only_cookie() {
    let app = build_test_app();
    let response = post_json(
        app.app(),
        "/api/admin/login",
        json!({ "password": ADMIN_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let header = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("login should set a cookie")
        .to_string();
    assert!(header.starts_with(&format!("{SESSION_COOKIE_NAME}=")));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));
    assert!(!header.contains("Max-Age"));

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Login successful");
    assert_eq!(app.store.session_count().await, 1);
}

#[tokio::test]
async fn login_wrong_password_is_401() {
    let app = build_test_app();
    let response = post_json(app.app(), "/api/admin/login", json!({ "password": "nope" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid password");
    assert_eq!(app.store.session_count().await, 0);
}

#[tokio::test]
async fn login_with_malformed_body_is_400() {
    let app = build_test_app();
    let response = post_json(app.app(), "/api/admin/login", json!({ "pass": 1 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid request data");
}

#[tokio::test]
async fn login_with_empty_password_is_400() {
    let app = build_test_app();
    let response = post_json(app.app(), "/api/admin/login", json!({ "password": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid request data");
    assert_eq!(app.store.session_count().await, 0);
}

#[tokio::test]
async fn relogin_rotates_the_session() {
    let app = build_test_app();
    let first = login(app.app()).await;

    let response = post_json_auth(
        app.app(),
        "/api/admin/login",
        json!({ "password": ADMIN_PASSWORD }),
        &first,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = set_cookie_pair(&response).expect("re-login should set a cookie");

    assert_ne!(first, second);
    assert!(!is_authenticated(&app, Some(&first)).await);
    assert!(is_authenticated(&app, Some(&second)).await);
    assert_eq!(app.store.session_count().await, 1);
}

// ---------------------------------------------------------------------------
// Check / logout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn check_reflects_login_state() {
    let app = build_test_app();
    assert!(!is_authenticated(&app, None).await);

    let cookie = login(app.app()).await;
    assert!(is_authenticated(&app, Some(&cookie)).await);

    let forged = format!("{SESSION_COOKIE_NAME}=forged-token");
    assert!(!is_authenticated(&app, Some(&forged)).await);
}

#[tokio::test]
async fn logout_ends_the_session_and_clears_cookie() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let response = post_json_auth(app.app(), "/api/admin/logout", json!({}), &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let header = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(header.contains("Max-Age=0"));
    assert_eq!(body_json(response).await["message"], "Logout successful");

    assert!(!is_authenticated(&app, Some(&cookie)).await);
    assert_eq!(app.store.session_count().await, 0);

    let response = get_with_cookie(app.app(), "/api/contact", &cookie).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn logout_without_session_still_succeeds() {
    let app = build_test_app();
    let response = post_json(app.app(), "/api/admin/logout", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

// ---------------------------------------------------------------------------
// Expiry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn expired_session_is_rejected() {
    let app = build_test_app();
    let cookie = plant_session(&app, "stale-token", Duration::minutes(-5)).await;

    assert!(!is_authenticated(&app, Some(&cookie)).await);
    let response = get_with_cookie(app.app(), "/api/contact", &cookie).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["message"], "Unauthorized");
}

#[tokio::test]
async fn gated_request_slides_expiry_but_check_does_not() {
    let app = build_test_app();
    let cookie = plant_session(&app, "live-token", Duration::minutes(5)).await;
    let token_hash = hash_session_token("live-token");

    let planted = session_expiry(&app, &token_hash).await;

    assert!(is_authenticated(&app, Some(&cookie)).await);
    assert_eq!(
        session_expiry(&app, &token_hash).await,
        planted,
        "check must not extend the session"
    );

    let response = get_with_cookie(app.app(), "/api/contact", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        session_expiry(&app, &token_hash).await > planted + Duration::hours(1),
        "a gated request should push expiry out to the full lifetime"
    );
}
