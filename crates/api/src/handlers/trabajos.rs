//! Handlers for the `/trabajos` resource.
//!
//! Trabajos carry an owned image gallery; the update handler delegates the
//! atomic gallery replacement to `TrabajoRepo::update`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use mdp_core::error::CoreError;
use mdp_core::types::DbId;
use mdp_db::models::trabajo::{CreateTrabajo, TrabajoConImagenes, UpdateTrabajo};
use mdp_db::repositories::TrabajoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// GET /api/trabajos
///
/// Public. All trabajos newest first, each with its gallery ordered by
/// `orden` ascending.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<TrabajoConImagenes>>> {
    let trabajos = TrabajoRepo::list_all(&state.pool).await?;
    Ok(Json(trabajos))
}

/// GET /api/trabajos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TrabajoConImagenes>> {
    let trabajo = TrabajoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trabajo",
            id,
        }))?;
    Ok(Json(trabajo))
}

/// POST /api/trabajos
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateTrabajo>,
) -> AppResult<(StatusCode, Json<TrabajoConImagenes>)> {
    validate_create(&input)?;
    let trabajo = TrabajoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(trabajo)))
}

/// PUT /api/trabajos/{id}
///
/// Applies provided scalar fields and, when `imagenes` is present (even as
/// an empty list), replaces the entire gallery, all inside one transaction.
/// Omitting `imagenes` leaves the gallery untouched.
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrabajo>,
) -> AppResult<Json<TrabajoConImagenes>> {
    validate_update(&input)?;
    let trabajo = TrabajoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trabajo",
            id,
        }))?;
    Ok(Json(trabajo))
}

/// DELETE /api/trabajos/{id}
///
/// Gallery rows are removed by FK cascade.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TrabajoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Trabajo",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateTrabajo) -> Result<(), AppError> {
    if input.titulo.trim().is_empty() {
        return Err(validation("titulo is required"));
    }
    if input.descripcion.trim().is_empty() {
        return Err(validation("descripcion is required"));
    }
    if input.imagen_principal_url.trim().is_empty() {
        return Err(validation("imagen_principal_url is required"));
    }
    validate_imagenes(input.imagenes.as_deref())
}

fn validate_update(input: &UpdateTrabajo) -> Result<(), AppError> {
    if matches!(&input.titulo, Some(t) if t.trim().is_empty()) {
        return Err(validation("titulo must not be empty"));
    }
    if matches!(&input.descripcion, Some(d) if d.trim().is_empty()) {
        return Err(validation("descripcion must not be empty"));
    }
    if matches!(&input.imagen_principal_url, Some(u) if u.trim().is_empty()) {
        return Err(validation("imagen_principal_url must not be empty"));
    }
    validate_imagenes(input.imagenes.as_deref())
}

fn validate_imagenes(
    imagenes: Option<&[mdp_db::models::trabajo::ImagenInput]>,
) -> Result<(), AppError> {
    if let Some(imagenes) = imagenes {
        if imagenes.iter().any(|img| img.url.trim().is_empty()) {
            return Err(validation("every gallery image needs a url"));
        }
    }
    Ok(())
}

fn validation(msg: &str) -> AppError {
    AppError::Core(CoreError::Validation(msg.to_string()))
}
