//! Employee API Module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /employees | GET | session |
//! | /employees/update | POST | session (own record) or manager |
//! | /employees/add | POST | manager |
//! | /employees/delete/{id} | DELETE | manager |

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::require_manager;
use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/employees", get(handler::list))
        .route("/employees/update", post(handler::update));

    let manage_routes = Router::new()
        .route("/employees/add", post(handler::create))
        .route("/employees/delete/{id}", delete(handler::delete))
        .route_layer(middleware::from_fn(require_manager));

    read_routes.merge(manage_routes)
}
