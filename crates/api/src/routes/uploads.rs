//! Route definitions for the `/upload` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, post};
use axum::Router;
use mdp_core::uploads::MAX_UPLOAD_BYTES;

use crate::handlers::uploads;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the raw file limit.
const MULTIPART_OVERHEAD_BYTES: usize = 16 * 1024;

/// Routes mounted at `/upload`.
///
/// The body limit rejects oversized uploads with 413 before the handler
/// buffers anything.
///
/// ```text
/// POST   /image             -> upload_image (auth, multipart)
/// DELETE /image/{filename}  -> delete_image (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/image",
            post(uploads::upload_image)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .route("/image/{filename}", delete(uploads::delete_image))
}
