//! Novedad (news item) entity model and DTOs.

use mdp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `novedades` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Novedad {
    pub id: DbId,
    pub titulo: String,
    pub descripcion: String,
    pub imagen_url: String,
    /// Marks corporate-social-responsibility content for the filtered
    /// public listing.
    pub es_rse: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new novedad.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNovedad {
    pub titulo: String,
    pub descripcion: String,
    pub imagen_url: String,
    /// Defaults to `false` if omitted.
    pub es_rse: Option<bool>,
}

/// DTO for updating an existing novedad. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNovedad {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub imagen_url: Option<String>,
    pub es_rse: Option<bool>,
}
