//! Repository for the `transactions` table.

use sqlx::PgPool;
use tasktutor_core::types::DbId;

use crate::models::transaction::{CreateTransaction, Transaction, UpdateTransaction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tx_type, category, amount, date, created_at, updated_at";

/// Provides CRUD operations for budget transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a new transaction, returning the created row.
    ///
    /// If `date` is `None` in the input, the database's current timestamp
    /// is applied, so a stored row always carries a `date`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (tx_type, category, amount, date)
             VALUES ($1, $2, $3, COALESCE($4, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(&input.tx_type)
            .bind(&input.category)
            .bind(input.amount)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// List all transactions in storage order (no ordering is guaranteed).
    pub async fn list(pool: &PgPool) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transactions");
        sqlx::query_as::<_, Transaction>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a transaction. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTransaction,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "UPDATE transactions SET
                tx_type = COALESCE($2, tx_type),
                category = COALESCE($3, category),
                amount = COALESCE($4, amount),
                date = COALESCE($5, date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(&input.tx_type)
            .bind(&input.category)
            .bind(input.amount)
            .bind(input.date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a transaction by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
