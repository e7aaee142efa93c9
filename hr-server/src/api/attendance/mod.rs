//! Attendance API Module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /attendance | GET | session |
//! | /attendance/expanded | GET | session |
//! | /attendance/employee/{id} | GET | session (own) or manager |
//! | /attendance/checkIn | POST | session (own) or manager |
//! | /attendance/add | POST | manager |
//! | /attendance/update | POST | manager |
//! | /attendance/pay | POST | manager |
//! | /attendance/delete/{id} | DELETE | manager |

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::require_manager;
use crate::core::ServerState;

/// Attendance router
pub fn router() -> Router<ServerState> {
    let session_routes = Router::new()
        .route("/attendance", get(handler::list))
        .route("/attendance/expanded", get(handler::list_expanded))
        .route("/attendance/employee/{id}", get(handler::list_for_employee))
        .route("/attendance/checkIn", post(handler::check_in));

    let manage_routes = Router::new()
        .route("/attendance/add", post(handler::create))
        .route("/attendance/update", post(handler::update))
        .route("/attendance/pay", post(handler::pay))
        .route("/attendance/delete/{id}", delete(handler::delete))
        .route_layer(middleware::from_fn(require_manager));

    session_routes.merge(manage_routes)
}
