//! Earnings API Handlers

use axum::{Json, extract::State};

use crate::api::extract::ApiJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;
use crate::services::earnings::parse_range;
use crate::utils::{AppError, AppResult};
use shared::models::{EarningsRequest, EarningsView, EmployeeEarningsRequest};

/// Totals over every employee
pub async fn summary_total(
    State(state): State<ServerState>,
    ApiJson(req): ApiJson<EarningsRequest>,
) -> AppResult<Json<EarningsView>> {
    let range = parse_range(&req.start_date, &req.end_date)?;
    Ok(Json(state.earnings.summary_total(range).await?))
}

/// Totals for one employee
pub async fn single(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<EmployeeEarningsRequest>,
) -> AppResult<Json<EarningsView>> {
    if !user.can_act_for(req.emp_id) {
        security_log!(
            "WARN",
            "earnings_denied",
            employee_id = user.employee_id,
            target = req.emp_id
        );
        return Err(AppError::permission_denied(
            "You can only view your own earnings.",
        ));
    }
    let range = parse_range(&req.start_date, &req.end_date)?;
    Ok(Json(
        state
            .earnings
            .payment_details_for_employee(req.emp_id, range)
            .await?,
    ))
}
