//! HTTP Server
//!
//! Binds a TCP listener and serves the router until stopped.

use crate::router::build_router;
use respmodel_core::application::UserService;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8000;

/// HTTP Server Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    service: Arc<UserService>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, service: Arc<UserService>) -> Self {
        Self { config, service }
    }

    /// Bind and start serving in a background task
    pub async fn start(self) -> Result<HttpServerHandle, ServerError> {
        let addr = self.config.addr();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;

        info!(addr = %local_addr, "HTTP server listening");

        let app = build_router(self.service);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    // Sender dropped counts as a stop request too
                    let _ = shutdown_rx.await;
                })
                .await
        });

        Ok(HttpServerHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

/// Running server; dropping it without `stop` leaves the task to stop on its own
pub struct HttpServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl HttpServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn stop(self) -> Result<(), ServerError> {
        let _ = self.shutdown_tx.send(());
        self.task.await??;
        info!("HTTP server stopped");
        Ok(())
    }
}
