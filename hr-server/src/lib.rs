//! HR Server - employees, shifts, attendance and earnings over HTTP
//!
//! # Architecture
//!
//! - **Services** (`services`): shift catalog, employee directory,
//!   attendance ledger (no-overlap rule) and earnings aggregation
//! - **Database** (`db`): SQLite through sqlx, embedded migrations
//! - **Auth** (`auth`): cookie sessions + Argon2
//! - **HTTP API** (`api`): axum routes and handlers
//!
//! # Layout
//!
//! ```text
//! hr-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── auth/          # sessions, middleware, password hashing
//! ├── services/      # the HR components
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # errors, logging, validation
//! └── db/            # pool and repositories
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, SessionStore};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and build the configuration
///
/// Must run before anything reads the environment.
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
