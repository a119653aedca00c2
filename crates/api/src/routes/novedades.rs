//! Route definitions for the `/novedades` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::novedades;
use crate::state::AppState;

/// Routes mounted at `/novedades`.
///
/// ```text
/// GET    /        -> list_all (public)
/// GET    /rse     -> list_rse (public)
/// GET    /{id}    -> get_by_id (public)
/// POST   /        -> create (auth)
/// PUT    /{id}    -> update (auth)
/// DELETE /{id}    -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(novedades::list_all).post(novedades::create))
        .route("/rse", get(novedades::list_rse))
        .route(
            "/{id}",
            get(novedades::get_by_id)
                .put(novedades::update)
                .delete(novedades::delete),
        )
}
