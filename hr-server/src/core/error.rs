use crate::utils::AppError;
use thiserror::Error;

/// Startup and serve-loop failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database initialisation failed: {0}")]
    Database(#[from] AppError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
