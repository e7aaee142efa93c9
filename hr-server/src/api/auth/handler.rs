//! Authentication Handlers
//!
//! Handles login, logout and the current-session lookup

use std::time::Duration;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::IntoResponse,
};

use crate::api::extract::ApiJson;
use crate::auth::CurrentUser;
use crate::auth::session::{expired_cookie, session_cookie, token_from_headers};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppResult, ok};
use shared::models::LoginRequest;

/// Fixed delay on failed logins to blunt credential guessing
const AUTH_FAILURE_DELAY_MS: u64 = 300;

/// Login handler
///
/// Verifies email and password, opens a session and sets the cookie.
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let employee = match state.employees.authenticate(&req.email, &req.password).await {
        Ok(e) => e,
        Err(e) => {
            tokio::time::sleep(Duration::from_millis(AUTH_FAILURE_DELAY_MS)).await;
            security_log!("WARN", "login_failed", email = req.email.clone(), reason = e.message.clone());
            return Err(e);
        }
    };

    let token = state.sessions.create(CurrentUser {
        employee_id: employee.employee_id,
        email: employee.email.clone(),
        is_manager: employee.is_manager,
    });
    let cookie = session_cookie(&token, state.sessions.ttl(), state.config.cookie_secure);

    tracing::info!(
        employee_id = employee.employee_id,
        is_manager = employee.is_manager,
        "Employee logged in"
    );

    Ok(([(SET_COOKIE, cookie)], ok("Logged in.")))
}

/// Logout handler
///
/// Always succeeds; an unknown or missing session is simply cleared.
pub async fn logout(State(state): State<ServerState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = token_from_headers(&headers)
        && state.sessions.remove(&token)
    {
        tracing::info!("Employee logged out");
    }
    (
        [(SET_COOKIE, expired_cookie(state.config.cookie_secure))],
        ok("Logged out."),
    )
}

/// The logged-in employee
pub async fn me(user: CurrentUser) -> Json<CurrentUser> {
    Json(user)
}
