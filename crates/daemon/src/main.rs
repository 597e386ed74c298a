//! Respmodel Server - Main Entry Point
//! HTTP server over an in-memory user store

mod config;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use config::{DaemonConfig, LogFormat, SecretMode};
use respmodel_api_http::HttpServer;
use respmodel_core::application::UserService;
use respmodel_core::port::{PlaceholderSecrets, SecretIssuer, SystemTimeProvider, UuidSecrets};
use respmodel_infra_memory::InMemoryUserRepository;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "respmodel=info,tower_http=info";

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::from_env()?;

    // 2. Initialize logging
    init_logging(config.log_format)?;

    info!("Respmodel server v{} starting...", VERSION);
    info!(addr = %config.http.addr(), secrets = ?config.secrets, "Configuration loaded");

    // 3. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let secret_issuer: Arc<dyn SecretIssuer> = match config.secrets {
        SecretMode::Placeholder => Arc::new(PlaceholderSecrets),
        SecretMode::Uuid => Arc::new(UuidSecrets),
    };

    let user_service = Arc::new(UserService::new(user_repo, time_provider, secret_issuer));

    // 4. Start HTTP server
    let handle = HttpServer::new(config.http.clone(), user_service)
        .start()
        .await
        .context("HTTP server start failed")?;

    info!("API Endpoints:");
    info!("  POST /users/        - Create user (returns public fields only)");
    info!("  GET  /debug/users/  - Internal record vs. response");
    info!("  GET  /              - Greeting");
    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown
    handle.stop().await.context("HTTP server stop failed")?;

    info!("Shutdown complete.");

    Ok(())
}
