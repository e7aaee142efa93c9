//! API routes
//!
//! - [`health`] - `GET /`
//! - [`auth`] - login, logout, current session
//! - [`employees`] - employee directory
//! - [`shifts`] - shift catalog
//! - [`attendance`] - attendance ledger
//! - [`earnings`] - earnings aggregation
//!
//! Every route except health, login and logout sits behind
//! [`require_session`]; manager-only routes add [`crate::auth::require_manager`].
//! Failures are `{ "msg": ... }` bodies with a 4xx/5xx status, GET lists
//! included.

pub mod extract;

pub mod attendance;
pub mod auth;
pub mod earnings;
pub mod employees;
pub mod health;
pub mod shifts;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    middleware,
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::require_session;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError};

/// JSON bodies here are small records
const MAX_BODY_BYTES: usize = 64 * 1024;

const MAX_CONCURRENT_REQUESTS: usize = 256;

/// Routes needing a session, before state and layers are applied
fn protected_routes() -> Router<ServerState> {
    Router::new()
        .merge(auth::protected_router())
        .merge(employees::router())
        .merge(shifts::router())
        .merge(attendance::router())
        .merge(earnings::router())
}

/// Build the complete application
pub fn build_app(state: ServerState) -> Router {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(protected)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    let err = AppError::not_found(format!("No route for {}.", uri.path()));
    (StatusCode::NOT_FOUND, Json(ApiResponse::error(&err)))
}
