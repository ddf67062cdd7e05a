//! lumen-server - HTTP server for the lumen learning backend
//!
//! This crate owns the progress store and content store and exposes them to
//! browsers as a small JSON API plus the embedded learner-facing pages.

mod error;
pub mod http;
pub mod session;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::{ApiError, ErrorBody, ServerError};
pub use http::create_router;
pub use state::AppState;

/// The main lumen server
pub struct LumenServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl LumenServer {
    /// Create a new server over the given state
    pub fn new(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        self.run_with_listener(listener).await
    }

    /// Run the server on an already-bound listener
    ///
    /// Used by tests that bind to an ephemeral port first.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), ServerError> {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("lumen server listening on {}", addr);
        }

        let router = create_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the socket address string (e.g., "127.0.0.1:5000")
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
