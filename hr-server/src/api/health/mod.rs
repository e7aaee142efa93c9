//! Health check route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | / | GET | none |

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(health))
}

pub async fn health() -> Html<&'static str> {
    Html("<h1>Server is running</h1>")
}
