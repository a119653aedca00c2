//! HTTP-level integration tests for the trabajos endpoints, including the
//! gallery-replacement semantics of PUT.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, post_json_auth, put_json_auth, seed_admin, token_for,
};
use sqlx::PgPool;

async fn seeded_token(pool: &PgPool) -> String {
    let (admin, _) = seed_admin(pool, "editor@agencia.com").await;
    token_for(&admin)
}

fn trabajo_body(titulo: &str, imagenes: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "titulo": titulo,
        "descripcion": "Campaña",
        "imagen_principal_url": "/uploads/principal.jpg",
        "imagenes": imagenes,
    })
}

async fn create_trabajo(pool: &PgPool, token: &str, body: serde_json::Value) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/trabajos", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_trabajo_with_gallery(pool: PgPool) {
    let token = seeded_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = trabajo_body(
        "Con galería",
        serde_json::json!([{ "url": "/uploads/a.jpg" }, { "url": "/uploads/b.jpg" }]),
    );
    let response = post_json_auth(app, "/api/trabajos", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["imagenes"].as_array().unwrap().len(), 2);
    assert_eq!(json["imagenes"][0]["orden"], 0);
    assert_eq!(json["imagenes"][1]["orden"], 1);
}

/// Replacement list with mixed explicit/default orden: the read-back is
/// sorted by orden ascending.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_put_replaces_gallery_with_orden_defaults(pool: PgPool) {
    let token = seeded_token(&pool).await;
    let id = create_trabajo(
        &pool,
        &token,
        trabajo_body("Original", serde_json::json!([{ "url": "/uploads/old.jpg" }])),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/trabajos/{id}"),
        serde_json::json!({
            "imagenes": [{ "url": "/uploads/a.jpg" }, { "url": "/uploads/b.jpg", "orden": 5 }]
        }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let imagenes = json["imagenes"].as_array().unwrap();
    assert_eq!(imagenes.len(), 2);
    assert_eq!(imagenes[0]["url"], "/uploads/a.jpg");
    assert_eq!(imagenes[0]["orden"], 0);
    assert_eq!(imagenes[1]["url"], "/uploads/b.jpg");
    assert_eq!(imagenes[1]["orden"], 5);
}

/// `imagenes: []` clears the gallery; omitting `imagenes` keeps it. The two
/// must behave differently.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_put_empty_vs_omitted_imagenes(pool: PgPool) {
    let token = seeded_token(&pool).await;
    let id = create_trabajo(
        &pool,
        &token,
        trabajo_body("Distinción", serde_json::json!([{ "url": "/uploads/keep.jpg" }])),
    )
    .await;

    // Omitted: gallery untouched.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        put_json_auth(
            app,
            &format!("/api/trabajos/{id}"),
            serde_json::json!({ "titulo": "Renombrado" }),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json["titulo"], "Renombrado");
    assert_eq!(json["imagenes"].as_array().unwrap().len(), 1);

    // Empty list: gallery cleared.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        put_json_auth(
            app,
            &format!("/api/trabajos/{id}"),
            serde_json::json!({ "imagenes": [] }),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json["imagenes"].as_array().unwrap().len(), 0);

    // Read back: still cleared.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/trabajos/{id}")).await).await;
    assert_eq!(json["imagenes"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_put_nonexistent_trabajo_returns_404(pool: PgPool) {
    let token = seeded_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        app,
        "/api/trabajos/999999",
        serde_json::json!({ "titulo": "Fantasma" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_listing_includes_ordered_gallery(pool: PgPool) {
    let token = seeded_token(&pool).await;
    create_trabajo(
        &pool,
        &token,
        trabajo_body(
            "Listada",
            serde_json::json!([
                { "url": "/uploads/second.jpg", "orden": 2 },
                { "url": "/uploads/first.jpg", "orden": 1 }
            ]),
        ),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/trabajos").await).await;
    let imagenes = json[0]["imagenes"].as_array().unwrap();
    assert_eq!(imagenes[0]["url"], "/uploads/first.jpg");
    assert_eq!(imagenes[1]["url"], "/uploads/second.jpg");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_trabajo(pool: PgPool) {
    let token = seeded_token(&pool).await;
    let id = create_trabajo(
        &pool,
        &token,
        trabajo_body("Borrable", serde_json::json!([{ "url": "/uploads/x.jpg" }])),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/trabajos/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/trabajos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mutations_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/trabajos",
        trabajo_body("Sin token", serde_json::json!(null)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/trabajos").await;
    assert_eq!(response.status(), StatusCode::OK, "listing stays public");
}
