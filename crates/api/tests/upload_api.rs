//! HTTP-level tests for image uploads and serving stored files.

mod common;

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, get, login, multipart_content_type, multipart_file,
    post_raw_auth,
};
use makerslab_core::upload::MAX_UPLOAD_BYTES;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

/// Entries in the upload directory, staging files included.
fn stored_file_count(app: &common::TestApp) -> usize {
    std::fs::read_dir(app.upload_dir.path()).unwrap().count()
}

#[tokio::test]
async fn upload_then_fetch_round_trips_bytes() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let body = multipart_file("image", "Shop Floor.PNG", "image/png", PNG_BYTES);
    let response = post_raw_auth(
        app.app(),
        "/api/upload",
        &multipart_content_type(),
        body,
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let url = json["imageUrl"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".png"));

    let response = get(app.app(), &url).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/png");
    assert!(response.headers().contains_key(CACHE_CONTROL));
    assert_eq!(body_bytes(response).await, PNG_BYTES);
}

#[tokio::test]
async fn file_field_name_is_also_accepted() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let body = multipart_file("file", "a.jpg", "image/jpeg", b"jpeg");
    let response = post_raw_auth(
        app.app(),
        "/api/upload",
        &multipart_content_type(),
        body,
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn upload_requires_admin_session() {
    let app = build_test_app();
    let body = multipart_file("image", "a.png", "image/png", PNG_BYTES);
    let response =
        post_raw_auth(app.app(), "/api/upload", &multipart_content_type(), body, None).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(stored_file_count(&app), 0);
}

#[tokio::test]
async fn non_image_upload_is_rejected() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let body = multipart_file("image", "notes.pdf", "application/pdf", b"%PDF-1.4");
    let response = post_raw_auth(
        app.app(),
        "/api/upload",
        &multipart_content_type(),
        body,
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Only image files are allowed");
    assert_eq!(stored_file_count(&app), 0);
}

#[tokio::test]
async fn oversized_upload_is_rejected_without_residue() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let data = vec![0u8; MAX_UPLOAD_BYTES + 1];
    let body = multipart_file("image", "huge.png", "image/png", &data);
    let response = post_raw_auth(
        app.app(),
        "/api/upload",
        &multipart_content_type(),
        body,
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = body_json(response).await["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.contains("too large"), "unexpected message: {message}");
    assert_eq!(stored_file_count(&app), 0);
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let app = build_test_app();
    let cookie = login(app.app()).await;

    let body = multipart_file("avatar", "a.png", "image/png", PNG_BYTES);
    let response = post_raw_auth(
        app.app(),
        "/api/upload",
        &multipart_content_type(),
        body,
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "No file uploaded");
}

#[tokio::test]
async fn unknown_or_unsafe_file_paths_are_404() {
    let app = build_test_app();

    let response = get(app.app(), "/uploads/missing.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app.app(), "/uploads/..%2F..%2Fetc%2Fpasswd").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
