//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::extract::{ApiJson, first_filter, parse_id};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{ApiResponse, AppError, AppResult, ok};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

/// List employees, optionally filtered by the first `?field=value`
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = match first_filter(&params) {
        Some((key, value)) => state.employees.get_by_field(key, value).await?,
        None => state.employees.get_all().await?,
    };
    Ok(Json(employees))
}

/// Create an employee
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<EmployeeCreate>,
) -> AppResult<Json<ApiResponse>> {
    state.employees.add(payload).await?;
    Ok(ok("New user added."))
}

/// Replace an employee record
///
/// Entry-level employees may only update themselves, and cannot change
/// `isManager`, `payRate` or `status`.
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiJson(payload): ApiJson<EmployeeUpdate>,
) -> AppResult<Json<ApiResponse>> {
    if user.is_manager {
        state.employees.update(payload).await?;
    } else if user.employee_id == payload.employee_id {
        state.employees.update_own_profile(payload).await?;
    } else {
        security_log!(
            "WARN",
            "employee_update_denied",
            employee_id = user.employee_id,
            target = payload.employee_id
        );
        return Err(AppError::permission_denied(
            "You can only update your own record.",
        ));
    }
    Ok(ok("User updated."))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    state.employees.delete(parse_id(&id)?).await?;
    Ok(ok("User deleted."))
}
