//! Server Implementation
//!
//! HTTP server startup, background tasks and graceful shutdown

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::auth::SessionStore;
use crate::core::{Config, Result, ServerError, ServerState};

/// How often expired sessions are swept
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60);

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Serve until SIGINT/SIGTERM, then drain requests and close the pool
    pub async fn run(&self) -> Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let purge = spawn_session_purge(state.sessions.clone());
        let app = crate::api::build_app(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!(environment = %self.config.environment, "HR server listening on {}", addr);
        if !self.config.is_development() && !self.config.cookie_secure {
            tracing::warn!("COOKIE_SECURE=false outside development, session cookies are sent over plain HTTP");
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        purge.abort();
        state.db.close().await;
        tracing::info!("Server stopped");
        Ok(())
    }
}

fn spawn_session_purge(sessions: SessionStore) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            let removed = sessions.purge_expired();
            if removed > 0 {
                tracing::debug!(removed, remaining = sessions.len(), "Expired sessions purged");
            }
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down...");
}
