//! Handlers for the singleton construction banner.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use makerslab_db::models::banner::{ConstructionBanner, UpdateConstructionBanner};

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::Keyed;
use crate::state::AppState;

/// GET /api/construction-banner
///
/// `banner` is `null` until the banner has been created.
pub async fn get(
    State(state): State<AppState>,
) -> AppResult<Json<Keyed<Option<ConstructionBanner>>>> {
    let banner = state.store.banner().get_banner().await?;
    Ok(Json(Keyed::new("banner", banner)))
}

/// PUT /api/construction-banner
pub async fn upsert(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    payload: Result<Json<UpdateConstructionBanner>, JsonRejection>,
) -> AppResult<Json<Keyed<ConstructionBanner>>> {
    let Json(patch) = payload
        .map_err(|_| AppError::BadRequest("Failed to update construction banner".into()))?;

    let banner = state.store.banner().upsert_banner(&patch).await?;
    tracing::info!(id = %banner.id, enabled = banner.enabled, "Construction banner saved");

    Ok(Json(
        Keyed::new("banner", banner).with_message("Construction banner updated"),
    ))
}
