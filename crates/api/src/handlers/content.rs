//! Generic handlers shared by every content collection.
//!
//! Each collection is a [`ContentEntity`]; its associated constants supply
//! the envelope keys and message wording, so `/services`, `/projects`,
//! `/equipment`, `/process-steps`, and `/testimonials` all run this code.
//!
//! Ids in the path are opaque. A string that is not a valid id cannot name
//! an existing row, so it is treated as absent rather than malformed.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use makerslab_core::error::CoreError;
use makerslab_core::types::ContentId;
use makerslab_db::models::ContentEntity;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::{Keyed, MessageResponse};
use crate::state::AppState;

/// GET /api/{collection}
pub async fn list<E: ContentEntity>(State(state): State<AppState>) -> AppResult<Json<Keyed<Vec<E>>>> {
    let rows = E::collection(&*state.store).list().await?;
    Ok(Json(Keyed::new(E::LIST_KEY, rows)))
}

/// GET /api/{collection}/{id}
pub async fn get_by_id<E: ContentEntity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Keyed<E>>> {
    let row = match parse_id(&id) {
        Some(content_id) => E::collection(&*state.store).find_by_id(content_id).await?,
        None => None,
    };
    let row = row.ok_or_else(|| not_found::<E>(id))?;
    Ok(Json(Keyed::new(E::ITEM_KEY, row)))
}

/// POST /api/{collection}
pub async fn create<E: ContentEntity>(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    payload: Result<Json<E::Create>, JsonRejection>,
) -> AppResult<Json<Keyed<E>>> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(entity = E::ENTITY, error = %rejection, "Rejected create body");
        AppError::BadRequest(format!("Failed to create {}", E::LABEL))
    })?;

    let row = E::collection(&*state.store).create(&input).await?;
    tracing::info!(entity = E::ENTITY, id = %row.id(), "Created");

    Ok(Json(
        Keyed::new(E::ITEM_KEY, row).with_message(format!("{} created", capitalize(E::LABEL))),
    ))
}

/// PUT /api/{collection}/{id}
pub async fn update<E: ContentEntity>(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    payload: Result<Json<E::Update>, JsonRejection>,
) -> AppResult<Json<Keyed<E>>> {
    let Json(patch) = payload.map_err(|rejection| {
        tracing::debug!(entity = E::ENTITY, error = %rejection, "Rejected update body");
        AppError::BadRequest(format!("Failed to update {}", E::LABEL))
    })?;

    let row = match parse_id(&id) {
        Some(content_id) => E::collection(&*state.store).update(content_id, &patch).await?,
        None => None,
    };
    let row = row.ok_or_else(|| not_found::<E>(id))?;
    tracing::info!(entity = E::ENTITY, id = %row.id(), "Updated");

    Ok(Json(
        Keyed::new(E::ITEM_KEY, row).with_message(format!("{} updated", capitalize(E::LABEL))),
    ))
}

/// DELETE /api/{collection}/{id}
///
/// Succeeds whether or not the row existed.
pub async fn delete<E: ContentEntity>(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if let Some(content_id) = parse_id(&id) {
        let deleted = E::collection(&*state.store).delete(content_id).await?;
        tracing::info!(entity = E::ENTITY, id = %content_id, deleted, "Delete requested");
    }
    Ok(Json(MessageResponse::ok(format!(
        "{} deleted",
        capitalize(E::LABEL)
    ))))
}

fn parse_id(raw: &str) -> Option<ContentId> {
    raw.parse().ok()
}

fn not_found<E: ContentEntity>(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: E::ENTITY,
        id,
    })
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
