//! Repository for the `novedades` table.

use mdp_core::types::DbId;
use sqlx::PgPool;

use crate::models::novedad::{CreateNovedad, Novedad, UpdateNovedad};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, titulo, descripcion, imagen_url, es_rse, created_at, updated_at";

/// Provides CRUD operations for novedades.
pub struct NovedadRepo;

impl NovedadRepo {
    /// Insert a new novedad, returning the created row.
    ///
    /// If `es_rse` is `None`, defaults to `false`.
    pub async fn create(pool: &PgPool, input: &CreateNovedad) -> Result<Novedad, sqlx::Error> {
        let query = format!(
            "INSERT INTO novedades (titulo, descripcion, imagen_url, es_rse)
             VALUES ($1, $2, $3, COALESCE($4, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novedad>(&query)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(&input.imagen_url)
            .bind(input.es_rse)
            .fetch_one(pool)
            .await
    }

    /// Find a novedad by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Novedad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM novedades WHERE id = $1");
        sqlx::query_as::<_, Novedad>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all novedades, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Novedad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM novedades ORDER BY created_at DESC");
        sqlx::query_as::<_, Novedad>(&query).fetch_all(pool).await
    }

    /// List RSE-flagged novedades, newest first, capped at `limit` rows.
    pub async fn list_rse(pool: &PgPool, limit: i64) -> Result<Vec<Novedad>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM novedades
             WHERE es_rse = true
             ORDER BY created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Novedad>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a novedad. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNovedad,
    ) -> Result<Option<Novedad>, sqlx::Error> {
        let query = format!(
            "UPDATE novedades SET
                titulo = COALESCE($2, titulo),
                descripcion = COALESCE($3, descripcion),
                imagen_url = COALESCE($4, imagen_url),
                es_rse = COALESCE($5, es_rse)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novedad>(&query)
            .bind(id)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(&input.imagen_url)
            .bind(input.es_rse)
            .fetch_optional(pool)
            .await
    }

    /// Delete a novedad by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM novedades WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
