//! HTTP-level tests for quote requests and newsletter signups.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, get_with_cookie, login, post_json};
use serde_json::json;

fn quote_request(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "email": "client@example.com",
        "phone": "555-0100",
        "budget": "$5k-$10k",
        "description": "Custom steel staircase",
    })
}

// ---------------------------------------------------------------------------
// Quote requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quote_request_is_accepted_publicly() {
    let app = build_test_app();
    let response = post_json(app.app(), "/api/contact", quote_request("Ada")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Quote request received successfully");
    assert!(json["id"].is_string());
}

#[tokio::test]
async fn quote_request_validates_fields() {
    let app = build_test_app();

    let response = post_json(app.app(), "/api/contact", quote_request("  ")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut bad_email = quote_request("Ada");
    bad_email["email"] = json!("not-an-email");
    let response = post_json(app.app(), "/api/contact", bad_email).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);

    let response = post_json(app.app(), "/api/contact", json!({ "name": "Ada" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submissions_list_newest_first_for_admin_only() {
    let app = build_test_app();
    post_json(app.app(), "/api/contact", quote_request("First")).await;
    post_json(app.app(), "/api/contact", quote_request("Second")).await;

    assert_eq!(get(app.app(), "/api/contact").await.status(), StatusCode::FORBIDDEN);

    let cookie = login(app.app()).await;
    let json = body_json(get_with_cookie(app.app(), "/api/contact", &cookie).await).await;
    let names: Vec<&str> = json["submissions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
    assert_eq!(json["submissions"][0]["budget"], "$5k-$10k");
    assert!(json["submissions"][0]["timeline"].is_null());
}

// ---------------------------------------------------------------------------
// Newsletter
// ---------------------------------------------------------------------------

#[tokio::test]
async fn newsletter_signup_succeeds_once() {
    let app = build_test_app();

    let response = post_json(app.app(), "/api/newsletter", json!({ "email": "a@b.co" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Successfully subscribed to newsletter"
    );

    let response =
        post_json(app.app(), "/api/newsletter", json!({ "email": "  A@B.CO " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "This email is already subscribed");
}

#[tokio::test]
async fn newsletter_rejects_invalid_email() {
    let app = build_test_app();
    let response = post_json(app.app(), "/api/newsletter", json!({ "email": "nope" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app.app(), "/api/newsletter", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signups_are_stored_normalized() {
    let app = build_test_app();
    post_json(app.app(), "/api/newsletter", json!({ "email": " Shop@Example.com" })).await;

    assert_eq!(get(app.app(), "/api/newsletter").await.status(), StatusCode::FORBIDDEN);

    let cookie = login(app.app()).await;
    let json = body_json(get_with_cookie(app.app(), "/api/newsletter", &cookie).await).await;
    assert_eq!(json["signups"].as_array().unwrap().len(), 1);
    assert_eq!(json["signups"][0]["email"], "shop@example.com");
}
