//! Handlers for the `/classes` resource.
//!
//! Create runs required-field validation; update is a permissive partial
//! merge. The two paths never share validation code.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tasktutor_core::error::CoreError;
use tasktutor_core::types::DbId;
use tasktutor_db::models::class_entry::{ClassEntry, CreateClassEntry, UpdateClassEntry};
use tasktutor_db::repositories::ClassRepo;

use crate::error::AppResult;
use crate::handlers::parse_id;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/classes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ClassEntry>>> {
    let classes = ClassRepo::list(&state.pool).await?;
    Ok(Json(classes))
}

/// GET /api/classes/{id}
///
/// An identifier that does not parse as a [`DbId`] can never match a
/// stored row, so it reports not-found rather than a server error.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ClassEntry>> {
    let Ok(id) = raw_id.parse::<DbId>() else {
        return Err(CoreError::not_found("Class", raw_id).into());
    };

    let class = ClassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Class", id))?;
    Ok(Json(class))
}

/// POST /api/classes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClassEntry>,
) -> AppResult<(StatusCode, Json<ClassEntry>)> {
    input.validate()?;

    let class = ClassRepo::create(&state.pool, &input).await?;

    tracing::info!(id = class.id, subject = %class.subject, "Class created");

    Ok((StatusCode::CREATED, Json(class)))
}

/// PUT /api/classes/{id}
///
/// Permissive partial merge: whatever subset of fields the body carries is
/// applied over the stored row, with no field-level validation.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateClassEntry>,
) -> AppResult<Json<ClassEntry>> {
    let id = parse_id(&raw_id, "class")?;

    let class = ClassRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Class", id))?;

    tracing::info!(id = class.id, "Class updated");

    Ok(Json(class))
}

/// DELETE /api/classes/{id}
///
/// Idempotent: deleting an id that matches nothing still confirms success.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id, "class")?;

    let deleted = ClassRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Class deleted");
    } else {
        tracing::debug!(id, "Delete matched no class");
    }

    Ok(Json(MessageResponse::new("Class deleted successfully")))
}
