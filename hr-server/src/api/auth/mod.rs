//! Authentication Routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /login | POST | public |
//! | /logout | GET | public |
//! | /me | GET | session |

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Public routes: login and logout
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/logout", get(handler::logout))
}

/// Session routes
pub fn protected_router() -> Router<ServerState> {
    Router::new().route("/me", get(handler::me))
}
