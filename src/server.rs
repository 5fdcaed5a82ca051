//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, schema setup, service wiring and the Axum
//! server lifecycle.

use crate::application::services::CodeAllocator;
use crate::config::Config;
use crate::domain::repositories::UrlMappingRepository;
use crate::infrastructure::persistence::SqliteUrlMappingRepository;
use crate::routes::{AssetDirs, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - `generated_urls` table
/// - Code allocator for the configured strategy
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or the schema cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = SqliteUrlMappingRepository::connect(&config.db_path, config.db_max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", config.db_path))?;
    tracing::info!("Connected to database");

    repository
        .init()
        .await
        .context("Failed to initialize database schema")?;
    tracing::info!("Database schema ready");

    let allocator = CodeAllocator::new(config.code_generator(), config.code_max_attempts);
    let state = AppState::new(Arc::new(repository), allocator, config.base_url.clone());

    let assets = AssetDirs {
        static_dir: config.static_dir.clone(),
        images_dir: config.images_dir.clone(),
    };
    let app = app_router(state, &assets);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
