#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use makerslab_api::auth::password::hash_password;
use makerslab_api::auth::session::SessionConfig;
use makerslab_api::config::{ServerConfig, UploadBackend, UploadConfig};
use makerslab_api::router::build_app_router;
use makerslab_api::state::AppState;
use makerslab_db::store::memory::MemoryContentStore;
use makerslab_storage::LocalBlobStore;

pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// Hashing is slow; share one hash across every test in the binary.
fn admin_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(ADMIN_PASSWORD).expect("hashing should succeed"))
        .clone()
}

/// Build a test `ServerConfig` with safe defaults and uploads under `upload_dir`.
pub fn test_config(upload_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        db_keepalive_secs: 25,
        session: SessionConfig {
            password_hash: admin_password_hash(),
            ttl_hours: 24,
            cookie_secure: false,
        },
        uploads: UploadConfig {
            backend: UploadBackend::Local,
            dir: upload_dir.to_path_buf(),
            s3_bucket: None,
            s3_key_prefix: "uploads".to_string(),
        },
    }
}

/// A fully layered application over an in-memory store.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryContentStore>,
    /// Keeps the upload directory alive for the test's duration.
    pub upload_dir: TempDir,
}

impl TestApp {
    /// A clone of the router, ready for one `oneshot` call.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the application the same way `main.rs` does, with the PostgreSQL
/// store swapped for `MemoryContentStore` and uploads in a temp directory.
pub fn build_test_app() -> TestApp {
    let upload_dir = tempfile::tempdir().expect("tempdir should be created");
    let config = test_config(upload_dir.path());
    let store = Arc::new(MemoryContentStore::new());
    let local = Arc::new(LocalBlobStore::new(upload_dir.path()));

    let state = AppState {
        store: store.clone(),
        uploads: local.clone(),
        local_uploads: local,
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        upload_dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

fn request(method: Method, uri: &str, cookie: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match cookie {
        Some(cookie) => builder.header(COOKIE, cookie),
        None => builder,
    }
}

fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Request<Body> {
    request(method, uri, cookie)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(
        app,
        request(Method::GET, uri, Some(cookie))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(method, uri, body, None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, None)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, Some(cookie))).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body, Some(cookie))).await
}

pub async fn post_raw_auth(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
    cookie: Option<&str>,
) -> Response<Body> {
    let request = request(Method::POST, uri, cookie)
        .header(CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    send(
        app,
        request(Method::DELETE, uri, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// The `name=value` pair of the response's `Set-Cookie` header.
pub fn set_cookie_pair(response: &Response<Body>) -> Option<String> {
    let header = response.headers().get(SET_COOKIE)?.to_str().ok()?;
    header.split(';').next().map(|pair| pair.trim().to_string())
}

/// Log in as admin and return the cookie to send on later requests.
pub async fn login(app: Router) -> String {
    let response = post_json(
        app,
        "/api/admin/login",
        serde_json::json!({ "password": ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    set_cookie_pair(&response).expect("login should set a session cookie")
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

pub const MULTIPART_BOUNDARY: &str = "makerslab-test-boundary";

/// A `multipart/form-data` body holding one file field.
pub fn multipart_file(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")
}
