//! Trabajo (portfolio entry) entity model and DTOs.
//!
//! A trabajo owns an ordered gallery of [`TrabajoImagen`] rows. Gallery
//! images have no identity outside their parent; on update the whole set
//! is replaced (see `TrabajoRepo::update`).

use mdp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `trabajos` table (scalar fields only).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trabajo {
    pub id: DbId,
    pub titulo: String,
    pub descripcion: String,
    pub imagen_principal_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `trabajo_imagenes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrabajoImagen {
    pub id: DbId,
    pub trabajo_id: DbId,
    pub url: String,
    pub orden: i32,
}

/// A trabajo together with its gallery, ordered by `orden` ascending.
#[derive(Debug, Clone, Serialize)]
pub struct TrabajoConImagenes {
    #[serde(flatten)]
    pub trabajo: Trabajo,
    pub imagenes: Vec<TrabajoImagen>,
}

/// A gallery image as supplied by API clients.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagenInput {
    pub url: String,
    /// Defaults to the zero-based position in the input array if omitted.
    pub orden: Option<i32>,
}

/// DTO for creating a new trabajo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrabajo {
    pub titulo: String,
    pub descripcion: String,
    pub imagen_principal_url: String,
    /// Optional initial gallery.
    pub imagenes: Option<Vec<ImagenInput>>,
}

/// DTO for updating an existing trabajo. All fields are optional.
///
/// `imagenes: None` (field omitted) leaves the existing gallery untouched;
/// `imagenes: Some(vec![])` clears it. The two must never be conflated.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrabajo {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub imagen_principal_url: Option<String>,
    pub imagenes: Option<Vec<ImagenInput>>,
}
