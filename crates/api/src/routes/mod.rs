pub mod auth;
pub mod health;
pub mod novedades;
pub mod trabajos;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                  login (public)
/// /auth/create-admin           create admin (public)
///
/// /novedades                   list (public), create (auth)
/// /novedades/rse               RSE listing (public)
/// /novedades/{id}              get (public), update, delete (auth)
///
/// /trabajos                    list (public), create (auth)
/// /trabajos/{id}               get (public), update, delete (auth)
///
/// /upload/image                upload (auth, multipart)
/// /upload/image/{filename}     delete (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/novedades", novedades::router())
        .nest("/trabajos", trabajos::router())
        .nest("/upload", uploads::router())
}
