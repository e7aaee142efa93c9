//! Data models
//!
//! Shared between hr-server and its HTTP clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod attendance;
pub mod earnings;
pub mod employee;
pub mod filter;
pub mod serde_helpers;
pub mod shift;

// Re-exports
pub use attendance::*;
pub use earnings::*;
pub use employee::*;
pub use filter::*;
pub use shift::*;
