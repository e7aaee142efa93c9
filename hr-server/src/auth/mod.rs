//! Authentication and authorization
//!
//! - [`SessionStore`] - server-side sessions behind the `session` cookie
//! - [`CurrentUser`] - the logged-in employee
//! - [`require_session`] - session middleware
//! - [`require_manager`] - manager-only middleware
//! - [`password`] - Argon2 hashing

pub mod extractor;
pub mod middleware;
pub mod password;
pub mod session;

pub use middleware::{require_manager, require_session};
pub use session::{CurrentUser, SessionStore};
