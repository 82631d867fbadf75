//! Repository for the `classes` table.

use sqlx::PgPool;
use tasktutor_core::types::DbId;

use crate::models::class_entry::{ClassEntry, CreateClassEntry, UpdateClassEntry, DEFAULT_COLOR};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subject, day, time, instructor, color, created_at, updated_at";

/// Provides CRUD operations for class schedule entries.
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class entry, returning the created row.
    ///
    /// If `color` is `None` in the input, [`DEFAULT_COLOR`] is applied, so
    /// a stored row always carries all five fields. Required fields must
    /// already be validated; `None` values would violate NOT NULL here.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClassEntry,
    ) -> Result<ClassEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (subject, day, time, instructor, color)
             VALUES ($1, $2, $3, $4, COALESCE($5, '{DEFAULT_COLOR}'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassEntry>(&query)
            .bind(&input.subject)
            .bind(&input.day)
            .bind(&input.time)
            .bind(&input.instructor)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Find a class entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ClassEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, ClassEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all class entries in storage order (no ordering is guaranteed).
    pub async fn list(pool: &PgPool) -> Result<Vec<ClassEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes");
        sqlx::query_as::<_, ClassEntry>(&query).fetch_all(pool).await
    }

    /// Update a class entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClassEntry,
    ) -> Result<Option<ClassEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET
                subject = COALESCE($2, subject),
                day = COALESCE($3, day),
                time = COALESCE($4, time),
                instructor = COALESCE($5, instructor),
                color = COALESCE($6, color),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassEntry>(&query)
            .bind(id)
            .bind(&input.subject)
            .bind(&input.day)
            .bind(&input.time)
            .bind(&input.instructor)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a class entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
