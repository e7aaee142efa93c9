//! Attendance API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::extract::{ApiJson, first_filter, parse_id};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{ApiResponse, AppError, AppResult, ok};
use shared::models::{
    Attendance, AttendanceCreate, AttendanceDetail, AttendanceUpdate, CheckInRequest, PayRequest,
};

/// List attendance rows, optionally filtered by the first `?field=value`
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Attendance>>> {
    let rows = match first_filter(&params) {
        Some((key, value)) => state.attendance.get_by_field(key, value).await?,
        None => state.attendance.get_all().await?,
    };
    Ok(Json(rows))
}

/// Every row joined to its shift and employee
pub async fn list_expanded(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<AttendanceDetail>>> {
    Ok(Json(state.attendance.get_all_expanded().await?))
}

/// One employee's rows joined to their shifts
pub async fn list_for_employee(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<AttendanceDetail>>> {
    let emp_id = parse_id(&id)?;
    if !user.can_act_for(emp_id) {
        return Err(AppError::permission_denied(
            "You can only view your own attendance.",
        ));
    }
    Ok(Json(state.attendance.get_for_employee(emp_id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<AttendanceCreate>,
) -> AppResult<Json<ApiResponse>> {
    state.attendance.add(payload).await?;
    Ok(ok("New attendance added."))
}

pub async fn update(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<AttendanceUpdate>,
) -> AppResult<Json<ApiResponse>> {
    state.attendance.update(payload).await?;
    Ok(ok("Attendance updated."))
}

/// Check in or out; entry-level employees only for their own rows
pub async fn check_in(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiJson(payload): ApiJson<CheckInRequest>,
) -> AppResult<Json<ApiResponse>> {
    if !user.is_manager {
        let row = state.attendance.get_by_id(payload.attendance_id).await?;
        if row.emp_id != user.employee_id {
            security_log!(
                "WARN",
                "check_in_denied",
                employee_id = user.employee_id,
                attendance_id = payload.attendance_id
            );
            return Err(AppError::permission_denied(
                "You can only check in to your own shifts.",
            ));
        }
    }
    let msg = state
        .attendance
        .check_in_out(payload.attendance_id, &payload.checked_in)
        .await?;
    Ok(ok(msg))
}

pub async fn pay(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<PayRequest>,
) -> AppResult<Json<ApiResponse>> {
    let msg = state
        .attendance
        .toggle_paid(payload.attendance_id, &payload.is_paid)
        .await?;
    Ok(ok(msg))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    state.attendance.delete(parse_id(&id)?).await?;
    Ok(ok("Attendance deleted."))
}
