//! Earnings API Module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /earnings/all | POST | manager |
//! | /earnings/single | POST | session (own empID) or manager |

mod handler;

use axum::{Router, middleware, routing::post};

use crate::auth::require_manager;
use crate::core::ServerState;

/// Earnings router
pub fn router() -> Router<ServerState> {
    let manage_routes = Router::new()
        .route("/earnings/all", post(handler::summary_total))
        .route_layer(middleware::from_fn(require_manager));

    Router::new()
        .route("/earnings/single", post(handler::single))
        .merge(manage_routes)
}
