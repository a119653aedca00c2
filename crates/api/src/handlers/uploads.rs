//! Handlers for the `/upload` resource.
//!
//! Accepts a multipart form with an `image` field, validates the content
//! type before anything touches the disk, and stores the file under a
//! randomized name in the configured upload directory. The router caps the
//! request body at `MAX_UPLOAD_BYTES` plus multipart overhead; hitting
//! that cap surfaces as a 413 while the field is read.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use mdp_core::uploads::{
    is_image_content_type, stored_filename, validate_filename, MAX_UPLOAD_BYTES,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL the frontend can reference (served from `/uploads/*`).
    pub image_url: String,
    /// Stored filename, used later for deletion.
    pub filename: String,
}

/// POST /api/upload/image
///
/// Multipart form, field `image`, `image/*` content types only.
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("image") {
            continue; // ignore unknown fields
        }

        let content_type = field.content_type().unwrap_or("").to_string();
        if !is_image_content_type(&content_type) {
            return Err(AppError::BadRequest(format!(
                "Only image files are accepted, got '{content_type}'"
            )));
        }

        let original = field.file_name().unwrap_or("image").to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        // The route's body cap allows some slack for multipart framing;
        // the file itself must stay within the exact limit.
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::PayloadTooLarge(
                "Image exceeds the upload size limit".to_string(),
            ));
        }
        file = Some((original, data.to_vec()));
    }

    let (original, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;

    let filename = stored_filename(&original);

    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let path = state.config.upload_dir.join(&filename);
    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(filename = %filename, bytes = data.len(), "Stored uploaded image");

    Ok(Json(UploadResponse {
        image_url: format!("/uploads/{filename}"),
        filename,
    }))
}

/// Bodies over the route's size limit surface here as a multipart read
/// error; everything else is a malformed request.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Image exceeds the upload size limit".to_string())
    } else {
        AppError::BadRequest(err.to_string())
    }
}

/// DELETE /api/upload/image/{filename}
///
/// Removes a previously uploaded file. The filename is validated against
/// path traversal before touching the filesystem.
pub async fn delete_image(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(filename): Path<String>,
) -> AppResult<StatusCode> {
    validate_filename(&filename).map_err(AppError::BadRequest)?;

    let path = state.config.upload_dir.join(&filename);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => {
            tracing::info!(filename = %filename, "Deleted uploaded image");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(format!(
            "No uploaded image named '{filename}'"
        ))),
        Err(e) => Err(AppError::InternalError(format!(
            "Failed to delete upload: {e}"
        ))),
    }
}
