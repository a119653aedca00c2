//! Route definitions for the `/trabajos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::trabajos;
use crate::state::AppState;

/// Routes mounted at `/trabajos`.
///
/// ```text
/// GET    /        -> list_all (public)
/// GET    /{id}    -> get_by_id (public)
/// POST   /        -> create (auth)
/// PUT    /{id}    -> update (auth)
/// DELETE /{id}    -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trabajos::list_all).post(trabajos::create))
        .route(
            "/{id}",
            get(trabajos::get_by_id)
                .put(trabajos::update)
                .delete(trabajos::delete),
        )
}
