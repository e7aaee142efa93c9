//! Utilities - shared error types, logging, validation
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`ApiResponse`] - `{ "msg": ... }` response body (from shared::error)

pub mod error;
pub mod logger;
pub mod validation;

pub use error::ok;
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
