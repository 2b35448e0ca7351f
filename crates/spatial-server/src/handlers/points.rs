//! Point handlers

use crate::error::{ApiError, ApiResult};
use crate::extractors::{RecordId, ValidJson};
use crate::AppState;
use axum::{extract::State, Json};
use spatial_core::{NewPoint, Point, RecordKind, SavedResponse};
use tracing::info;

/// POST /point
///
/// The assigned id is logged but never returned to the caller.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<NewPoint>,
) -> ApiResult<Json<SavedResponse>> {
    let id = state.store.insert_point(&req).await?;
    info!("Point {} created", id);

    Ok(Json(SavedResponse::new(RecordKind::Point)))
}

/// PUT /point
pub async fn update(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<Point>,
) -> ApiResult<Json<SavedResponse>> {
    if state.store.find_point(req.id).await?.is_none() {
        return Err(ApiError::NotFound(RecordKind::Point));
    }

    state.store.update_point(&req).await?;
    info!("Point {} updated", req.id);

    Ok(Json(SavedResponse::new(RecordKind::Point)))
}

/// GET /point/:id
pub async fn get(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<Point>> {
    state
        .store
        .find_point(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(RecordKind::Point))
}
