//! Shift API Module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /shift | GET | session |
//! | /shift/add | POST | manager |
//! | /shift/update | POST | manager |
//! | /shift/delete/{id} | DELETE | manager |

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::require_manager;
use crate::core::ServerState;

/// Shift router
pub fn router() -> Router<ServerState> {
    let read_routes = Router::new().route("/shift", get(handler::list));

    let manage_routes = Router::new()
        .route("/shift/add", post(handler::create))
        .route("/shift/update", post(handler::update))
        .route("/shift/delete/{id}", delete(handler::delete))
        .route_layer(middleware::from_fn(require_manager));

    read_routes.merge(manage_routes)
}
