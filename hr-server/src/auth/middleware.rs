//! Authentication middleware
//!
//! Axum middleware for session authentication and the manager gate

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::{HeaderValue, header::SET_COOKIE};

use crate::auth::session::{CurrentUser, session_cookie, token_from_headers};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, ErrorCode};

/// Require a live session
///
/// Reads the `session` cookie, injects [`CurrentUser`] into the request
/// extensions and refreshes the cookie on the way out (sliding expiry).
///
/// | Failure | Status |
/// |---------|--------|
/// | no cookie | 401 NotAuthenticated |
/// | unknown or expired token | 401 SessionExpired |
pub async fn require_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let Some(token) = token_from_headers(req.headers()) else {
        security_log!("WARN", "session_missing", uri = req.uri().to_string());
        return Err(AppError::not_authenticated());
    };

    let Some(user) = state.sessions.touch(&token) else {
        security_log!("WARN", "session_expired", uri = req.uri().to_string());
        return Err(AppError::new(ErrorCode::SessionExpired));
    };

    req.extensions_mut().insert(user);
    let mut response = next.run(req).await;

    // Logout sets its own cookie
    if !response.headers().contains_key(SET_COOKIE) {
        let cookie = session_cookie(&token, state.sessions.ttl(), state.config.cookie_secure);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    Ok(response)
}

/// Require `isManager` on the session
///
/// Must run after [`require_session`].
pub async fn require_manager(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(AppError::not_authenticated)?;
    if !user.is_manager {
        security_log!(
            "WARN",
            "manager_required",
            employee_id = user.employee_id,
            uri = req.uri().to_string()
        );
        return Err(AppError::manager_required());
    }

    Ok(next.run(req).await)
}
