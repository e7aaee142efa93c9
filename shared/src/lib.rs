//! Shared types for the HR backend
//!
//! Error types, response structures, data models and the shift-time rules
//! used by the server and by anything that talks to it.

pub mod error;
pub mod models;
pub mod schedule;

// Re-exports
pub use axum::{Json, body};
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
