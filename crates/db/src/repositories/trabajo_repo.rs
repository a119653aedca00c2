//! Repository for the `trabajos` table and its owned `trabajo_imagenes`.

use mdp_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::trabajo::{
    CreateTrabajo, ImagenInput, Trabajo, TrabajoConImagenes, TrabajoImagen, UpdateTrabajo,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, titulo, descripcion, imagen_principal_url, created_at, updated_at";

/// Gallery column list.
const IMAGEN_COLUMNS: &str = "id, trabajo_id, url, orden";

/// Provides CRUD operations for trabajos and their image galleries.
pub struct TrabajoRepo;

impl TrabajoRepo {
    /// Insert a new trabajo with an optional initial gallery, returning
    /// the created row with its images.
    ///
    /// Each image's `orden` defaults to its zero-based position in the
    /// input array.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTrabajo,
    ) -> Result<TrabajoConImagenes, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO trabajos (titulo, descripcion, imagen_principal_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let trabajo = sqlx::query_as::<_, Trabajo>(&query)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(&input.imagen_principal_url)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(imagenes) = &input.imagenes {
            Self::insert_imagenes(&mut tx, trabajo.id, imagenes).await?;
        }

        let imagenes = Self::imagenes_in_tx(&mut tx, trabajo.id).await?;
        tx.commit().await?;

        Ok(TrabajoConImagenes { trabajo, imagenes })
    }

    /// Find a trabajo by its internal ID, with its gallery ordered by
    /// `orden` ascending.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrabajoConImagenes>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trabajos WHERE id = $1");
        let Some(trabajo) = sqlx::query_as::<_, Trabajo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let imagenes = Self::imagenes_for(pool, id).await?;
        Ok(Some(TrabajoConImagenes { trabajo, imagenes }))
    }

    /// List all trabajos, newest first, each with its ordered gallery.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TrabajoConImagenes>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trabajos ORDER BY created_at DESC");
        let trabajos = sqlx::query_as::<_, Trabajo>(&query).fetch_all(pool).await?;

        let imagen_query = format!(
            "SELECT {IMAGEN_COLUMNS} FROM trabajo_imagenes ORDER BY trabajo_id, orden ASC"
        );
        let imagenes = sqlx::query_as::<_, TrabajoImagen>(&imagen_query)
            .fetch_all(pool)
            .await?;

        // Group images by parent in one pass; both lists are small.
        let result = trabajos
            .into_iter()
            .map(|trabajo| {
                let own = imagenes
                    .iter()
                    .filter(|img| img.trabajo_id == trabajo.id)
                    .cloned()
                    .collect();
                TrabajoConImagenes {
                    trabajo,
                    imagenes: own,
                }
            })
            .collect();
        Ok(result)
    }

    /// Update a trabajo's scalar fields and synchronize its gallery, all
    /// inside one transaction.
    ///
    /// - Non-`None` scalar fields are applied (COALESCE semantics).
    /// - `imagenes: Some(list)` (including an empty list) replaces the
    ///   entire existing gallery with `list`; each image's `orden` defaults
    ///   to its zero-based array position.
    /// - `imagenes: None` leaves the existing gallery untouched.
    ///
    /// Returns `None` without applying anything if no row with the given
    /// `id` exists. Either every change commits or none do.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrabajo,
    ) -> Result<Option<TrabajoConImagenes>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE trabajos SET
                titulo = COALESCE($2, titulo),
                descripcion = COALESCE($3, descripcion),
                imagen_principal_url = COALESCE($4, imagen_principal_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(trabajo) = sqlx::query_as::<_, Trabajo>(&query)
            .bind(id)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(&input.imagen_principal_url)
            .fetch_optional(&mut *tx)
            .await?
        else {
            // Unknown id: the implicit rollback discards the no-op update.
            return Ok(None);
        };

        if let Some(imagenes) = &input.imagenes {
            sqlx::query("DELETE FROM trabajo_imagenes WHERE trabajo_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_imagenes(&mut tx, id, imagenes).await?;
        }

        let imagenes = Self::imagenes_in_tx(&mut tx, id).await?;
        tx.commit().await?;

        Ok(Some(TrabajoConImagenes { trabajo, imagenes }))
    }

    /// Delete a trabajo by ID. Returns `true` if a row was removed.
    /// Gallery rows go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trabajos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch a trabajo's gallery ordered by `orden` ascending.
    pub async fn imagenes_for(
        pool: &PgPool,
        trabajo_id: DbId,
    ) -> Result<Vec<TrabajoImagen>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGEN_COLUMNS} FROM trabajo_imagenes
             WHERE trabajo_id = $1
             ORDER BY orden ASC"
        );
        sqlx::query_as::<_, TrabajoImagen>(&query)
            .bind(trabajo_id)
            .fetch_all(pool)
            .await
    }

    /// Insert gallery rows inside an open transaction, assigning default
    /// `orden` values by array position.
    async fn insert_imagenes(
        tx: &mut Transaction<'_, Postgres>,
        trabajo_id: DbId,
        imagenes: &[ImagenInput],
    ) -> Result<(), sqlx::Error> {
        for (index, imagen) in imagenes.iter().enumerate() {
            let orden = imagen.orden.unwrap_or(index as i32);
            sqlx::query("INSERT INTO trabajo_imagenes (trabajo_id, url, orden) VALUES ($1, $2, $3)")
                .bind(trabajo_id)
                .bind(&imagen.url)
                .bind(orden)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    /// Fetch the ordered gallery inside an open transaction.
    async fn imagenes_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        trabajo_id: DbId,
    ) -> Result<Vec<TrabajoImagen>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGEN_COLUMNS} FROM trabajo_imagenes
             WHERE trabajo_id = $1
             ORDER BY orden ASC"
        );
        sqlx::query_as::<_, TrabajoImagen>(&query)
            .bind(trabajo_id)
            .fetch_all(&mut **tx)
            .await
    }
}
