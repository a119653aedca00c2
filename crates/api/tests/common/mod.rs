//! Shared harness for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without an actual TCP listener. The router is built through the same
//! [`build_app_router`] the production binary uses, so every test exercises
//! the full middleware stack.

#![allow(dead_code)] // not every test file uses every helper

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mdp_api::auth::jwt::{generate_token, JwtConfig};
use mdp_api::auth::password::hash_password;
use mdp_api::config::ServerConfig;
use mdp_api::router::build_app_router;
use mdp_api::state::AppState;
use mdp_db::models::admin::{Admin, CreateAdmin};
use mdp_db::repositories::AdminRepo;

/// Fixed JWT secret for tests.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults and the given upload dir.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_path_buf(),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a per-test temporary upload directory.
pub fn build_test_app(pool: PgPool) -> Router {
    let upload_dir = std::env::temp_dir().join(format!("mdp-test-uploads-{}", uuid()));
    build_test_app_with_upload_dir(pool, &upload_dir)
}

/// Like [`build_test_app`], but with an explicit upload directory so upload
/// tests can inspect the filesystem afterwards.
pub fn build_test_app_with_upload_dir(pool: PgPool, upload_dir: &Path) -> Router {
    let config = test_config(upload_dir);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

fn uuid() -> String {
    // Millisecond timestamp + pid is unique enough for a test dir name.
    format!(
        "{}-{}",
        std::process::id(),
        chrono::Utc::now().timestamp_micros()
    )
}

// ---------------------------------------------------------------------------
// Admin / token helpers
// ---------------------------------------------------------------------------

/// Create an admin directly in the database and return the row plus the
/// plaintext password used.
pub async fn seed_admin(pool: &PgPool, email: &str) -> (Admin, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let admin = AdminRepo::create(
        pool,
        &CreateAdmin {
            email: email.to_string(),
            password_hash: hashed,
        },
    )
    .await
    .expect("admin creation should succeed");
    (admin, password.to_string())
}

/// Generate a valid bearer token for the given admin using the test secret.
pub fn token_for(admin: &Admin) -> String {
    let jwt = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry_days: 7,
    };
    generate_token(admin.id, &admin.email, &jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

/// Assert a response has the expected status, with the body in the failure
/// message for easier debugging.
pub async fn assert_status(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&bytes).to_string();
    assert_eq!(status, expected, "unexpected status, body: {text}");
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

/// Boundary used by [`multipart_body`].
pub const MULTIPART_BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Build a single-field multipart body with the given field name, filename,
/// content type, and payload.
pub fn multipart_body(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Send a multipart POST with an Authorization header.
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    body: Vec<u8>,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}
