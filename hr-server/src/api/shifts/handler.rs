//! Shift API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::extract::{ApiJson, first_filter, parse_id};
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult, ok};
use shared::models::{Shift, ShiftCreate, ShiftUpdate};

/// List shifts, optionally filtered by the first `?field=value`
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Shift>>> {
    let shifts = match first_filter(&params) {
        Some((key, value)) => state.shifts.get_by_field(key, value).await?,
        None => state.shifts.get_all().await?,
    };
    Ok(Json(shifts))
}

pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ShiftCreate>,
) -> AppResult<Json<ApiResponse>> {
    state.shifts.add(payload).await?;
    Ok(ok("New shift added."))
}

pub async fn update(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ShiftUpdate>,
) -> AppResult<Json<ApiResponse>> {
    state.shifts.update(payload).await?;
    Ok(ok("Shift updated."))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    state.shifts.delete(parse_id(&id)?).await?;
    Ok(ok("Shift deleted."))
}
