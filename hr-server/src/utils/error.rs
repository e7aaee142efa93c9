//! Unified error handling
//!
//! Re-exports the shared error system and maps repository failures onto it.
//!
//! ```ignore
//! // Return an error
//! Err(AppError::new(ErrorCode::ShiftNotFound))
//!
//! // Return a confirmation
//! Ok(ok("Shift updated."))
//! ```

use crate::db::repository::RepoError;
use axum::Json;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// `200 { "msg": ... }`
pub fn ok(msg: impl Into<String>) -> Json<ApiResponse> {
    Json(ApiResponse::ok(msg))
}
