//! Handlers for the `/transactions` resource.
//!
//! Same contract shape as the class registry: validated create with a
//! defaulted `date`, permissive partial-merge update, idempotent delete.
//! There is no get-by-id handler.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tasktutor_core::error::CoreError;
use tasktutor_db::models::transaction::{CreateTransaction, Transaction, UpdateTransaction};
use tasktutor_db::repositories::TransactionRepo;

use crate::error::AppResult;
use crate::handlers::parse_id;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/transactions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Transaction>>> {
    let transactions = TransactionRepo::list(&state.pool).await?;
    Ok(Json(transactions))
}

/// POST /api/transactions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    input.validate()?;

    let transaction = TransactionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        id = transaction.id,
        tx_type = %transaction.tx_type,
        "Transaction created"
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// PUT /api/transactions/{id}
///
/// Permissive partial merge, 404 when the id matches no stored row.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateTransaction>,
) -> AppResult<Json<Transaction>> {
    let id = parse_id(&raw_id, "transaction")?;

    let transaction = TransactionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Transaction", id))?;

    tracing::info!(id = transaction.id, "Transaction updated");

    Ok(Json(transaction))
}

/// DELETE /api/transactions/{id}
///
/// Idempotent: deleting an id that matches nothing still confirms success.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id, "transaction")?;

    let deleted = TransactionRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Transaction deleted");
    } else {
        tracing::debug!(id, "Delete matched no transaction");
    }

    Ok(Json(MessageResponse::new("Transaction deleted successfully")))
}
