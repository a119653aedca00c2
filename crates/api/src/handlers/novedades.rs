//! Handlers for the `/novedades` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mdp_core::error::CoreError;
use mdp_core::types::DbId;
use mdp_db::models::novedad::{CreateNovedad, Novedad, UpdateNovedad};
use mdp_db::repositories::NovedadRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Default row cap for the RSE listing.
const DEFAULT_RSE_LIMIT: i64 = 4;

/// Query parameters for `GET /novedades/rse`.
#[derive(Debug, Deserialize)]
pub struct RseQuery {
    pub limit: Option<i64>,
}

/// GET /api/novedades
///
/// Public. All novedades, newest first.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Novedad>>> {
    let novedades = NovedadRepo::list_all(&state.pool).await?;
    Ok(Json(novedades))
}

/// GET /api/novedades/rse?limit=N
///
/// Public. RSE-flagged novedades only, newest first, capped at `limit`
/// (default 4).
pub async fn list_rse(
    State(state): State<AppState>,
    Query(query): Query<RseQuery>,
) -> AppResult<Json<Vec<Novedad>>> {
    let limit = query.limit.unwrap_or(DEFAULT_RSE_LIMIT).max(0);
    let novedades = NovedadRepo::list_rse(&state.pool, limit).await?;
    Ok(Json(novedades))
}

/// GET /api/novedades/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Novedad>> {
    let novedad = NovedadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Novedad",
            id,
        }))?;
    Ok(Json(novedad))
}

/// POST /api/novedades
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateNovedad>,
) -> AppResult<(StatusCode, Json<Novedad>)> {
    validate_create(&input)?;
    let novedad = NovedadRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(novedad)))
}

/// PUT /api/novedades/{id}
///
/// Partial update: absent fields keep their prior values.
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNovedad>,
) -> AppResult<Json<Novedad>> {
    validate_update(&input)?;
    let novedad = NovedadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Novedad",
            id,
        }))?;
    Ok(Json(novedad))
}

/// DELETE /api/novedades/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NovedadRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Novedad",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateNovedad) -> Result<(), AppError> {
    if input.titulo.trim().is_empty() {
        return Err(validation("titulo is required"));
    }
    if input.descripcion.trim().is_empty() {
        return Err(validation("descripcion is required"));
    }
    if input.imagen_url.trim().is_empty() {
        return Err(validation("imagen_url is required"));
    }
    Ok(())
}

fn validate_update(input: &UpdateNovedad) -> Result<(), AppError> {
    if matches!(&input.titulo, Some(t) if t.trim().is_empty()) {
        return Err(validation("titulo must not be empty"));
    }
    if matches!(&input.descripcion, Some(d) if d.trim().is_empty()) {
        return Err(validation("descripcion must not be empty"));
    }
    if matches!(&input.imagen_url, Some(u) if u.trim().is_empty()) {
        return Err(validation("imagen_url must not be empty"));
    }
    Ok(())
}

fn validation(msg: &str) -> AppError {
    AppError::Core(CoreError::Validation(msg.to_string()))
}
