//! HTTP-level tests for the content collection endpoints.
//!
//! Covers public listing, admin-gated writes, partial updates, ordering,
//! and the not-found / malformed-id paths.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, login, post_json, post_json_auth, put_json_auth};
use serde_json::json;

fn service_body(title: &str, order: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Precision cutting",
        "icon": "Zap",
        "order": order,
    })
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_public_and_initially_empty() {
    let app = build_test_app();
    let response = get(app.app(), "/api/services").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["services"], json!([]));
}

#[tokio::test]
async fn each_collection_uses_its_own_envelope_key() {
    let app = build_test_app();
    for (path, key) in [
        ("/api/projects", "projects"),
        ("/api/equipment", "equipment"),
        ("/api/process-steps", "steps"),
        ("/api/testimonials", "testimonials"),
    ] {
        let json = body_json(get(app.app(), path).await).await;
        assert!(json[key].is_array(), "{path} should list under '{key}'");
    }
}

#[tokio::test]
async fn get_unknown_or_malformed_id_is_404() {
    let app = build_test_app();

    let response = get(app.app(), "/api/services/67e55044-10b1-426f-9247-bb680e5fe0c8").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Service not found");

    let response = get(app.app(), "/api/services/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_requires_admin_session() {
    let app = build_test_app();
    let response = post_json(app.app(), "/api/services", service_body("Laser", "1")).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Unauthorized");

    let listed = body_json(get(app.app(), "/api/services").await).await;
    assert_eq!(listed["services"], json!([]), "rejected write must not persist");
}

#[tokio::test]
async fn create_then_get_round_trips_fields() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let response =
        post_json_auth(app.app(), "/api/services", service_body("Laser", "3"), &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Service created");
    assert_eq!(json["service"]["title"], "Laser");
    assert_eq!(json["service"]["order"], "3");
    assert!(json["service"]["imageUrl"].is_null());
    assert!(json["service"]["createdAt"].is_string());

    let id = json["service"]["id"].as_str().unwrap().to_string();
    let fetched = body_json(get(app.app(), &format!("/api/services/{id}")).await).await;
    assert_eq!(fetched["service"]["id"], id);
    assert_eq!(fetched["service"]["description"], "Precision cutting");
}

#[tokio::test]
async fn create_without_order_defaults_to_zero() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let body = json!({ "label": "Press brake", "spec": "100 t" });
    let json = body_json(post_json_auth(app.app(), "/api/equipment", body, &cookie).await).await;
    assert_eq!(json["equipment"]["order"], "0");
}

#[tokio::test]
async fn create_with_missing_fields_is_rejected() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let response = post_json_auth(
        app.app(),
        "/api/process-steps",
        json!({ "title": "Design" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Failed to create process step");
}

#[tokio::test]
async fn list_sorts_numerically_by_order() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    for (title, order) in [("Ten", "10"), ("Two", "2"), ("One", "1"), ("Junk", "abc")] {
        post_json_auth(app.app(), "/api/services", service_body(title, order), &cookie).await;
    }

    let json = body_json(get(app.app(), "/api/services").await).await;
    let titles: Vec<&str> = json["services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Junk", "One", "Two", "Ten"]);
}

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let created = body_json(
        post_json_auth(
            app.app(),
            "/api/services",
            json!({
                "title": "Welding",
                "description": "MIG and TIG",
                "icon": "Flame",
                "imageUrl": "/uploads/a.png",
            }),
            &cookie,
        )
        .await,
    )
    .await;
    let id = created["service"]["id"].as_str().unwrap().to_string();
    let created_updated_at = created["service"]["updatedAt"].as_str().unwrap().to_string();

    let response = put_json_auth(
        app.app(),
        &format!("/api/services/{id}"),
        json!({ "title": "Welding & Fab" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Service updated");
    assert_eq!(json["service"]["title"], "Welding & Fab");
    assert_eq!(json["service"]["description"], "MIG and TIG");
    assert_eq!(json["service"]["imageUrl"], "/uploads/a.png");
    assert_ne!(json["service"]["updatedAt"], created_updated_at);
    assert_eq!(json["service"]["createdAt"], created["service"]["createdAt"]);
}

#[tokio::test]
async fn update_with_null_clears_optional_image() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let created = body_json(
        post_json_auth(
            app.app(),
            "/api/equipment",
            json!({ "label": "Lathe", "spec": "1 m bed", "imageUrl": "/uploads/l.png" }),
            &cookie,
        )
        .await,
    )
    .await;
    let id = created["equipment"]["id"].as_str().unwrap().to_string();

    let json = body_json(
        put_json_auth(
            app.app(),
            &format!("/api/equipment/{id}"),
            json!({ "imageUrl": null }),
            &cookie,
        )
        .await,
    )
    .await;
    assert!(json["equipment"]["imageUrl"].is_null());
    assert_eq!(json["equipment"]["label"], "Lathe");
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let response = put_json_auth(
        app.app(),
        "/api/testimonials/67e55044-10b1-426f-9247-bb680e5fe0c8",
        json!({ "quote": "Great" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Testimonial not found");

    let listed = body_json(get(app.app(), "/api/testimonials").await).await;
    assert_eq!(listed["testimonials"], json!([]), "a missed update must not create a row");
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let created = body_json(
        post_json_auth(app.app(), "/api/services", service_body("Laser", "1"), &cookie).await,
    )
    .await;
    let uri = format!("/api/services/{}", created["service"]["id"].as_str().unwrap());

    for _ in 0..2 {
        let response = delete(app.app(), &uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Service deleted");
    }

    let response = delete(app.app(), "/api/services/not-a-uuid", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(get(app.app(), &uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_requires_admin_session() {
    let app = build_test_app();
    let cookie = login(app.app()).await;
    let created = body_json(
        post_json_auth(app.app(), "/api/services", service_body("Laser", "1"), &cookie).await,
    )
    .await;
    let uri = format!("/api/services/{}", created["service"]["id"].as_str().unwrap());

    let response = delete(app.app(), &uri, None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(get(app.app(), &uri).await.status(), StatusCode::OK);
}
