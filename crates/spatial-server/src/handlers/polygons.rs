//! Polygon handlers
//!
//! `coordinates` passes through untouched in both directions.

use crate::error::{ApiError, ApiResult};
use crate::extractors::{RecordId, ValidJson};
use crate::AppState;
use axum::{extract::State, Json};
use spatial_core::{NewPolygon, Polygon, RecordKind, SavedResponse};
use tracing::info;

/// POST /polygon
pub async fn create(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<NewPolygon>,
) -> ApiResult<Json<SavedResponse>> {
    let id = state.store.insert_polygon(&req).await?;
    info!("Polygon {} created", id);

    Ok(Json(SavedResponse::new(RecordKind::Polygon)))
}

/// PUT /polygon
pub async fn update(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<Polygon>,
) -> ApiResult<Json<SavedResponse>> {
    if state.store.find_polygon(req.id).await?.is_none() {
        return Err(ApiError::NotFound(RecordKind::Polygon));
    }

    state.store.update_polygon(&req).await?;
    info!("Polygon {} updated", req.id);

    Ok(Json(SavedResponse::new(RecordKind::Polygon)))
}

/// GET /polygon/:id
pub async fn get(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<Polygon>> {
    state
        .store
        .find_polygon(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(RecordKind::Polygon))
}
