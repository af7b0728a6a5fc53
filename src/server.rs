//! HTTP server initialization and runtime setup.
//!
//! Opens the configured storage backend, builds the router and runs the Axum
//! server until Ctrl-C or SIGTERM.

use crate::application::services::LinkService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{
    FileLinkRepository, InMemoryLinkRepository, PgLinkRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The storage backend cannot be opened (unreadable file, database down)
/// - Database migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let link_service = Arc::new(LinkService::new(repository, config.link_settings()));

    match link_service.count().await {
        Ok(count) => tracing::info!(
            "Storage ready ({} backend, {} links)",
            link_service.backend_name(),
            count
        ),
        Err(e) => tracing::warn!("Storage opened but could not be counted: {}", e),
    }

    let state = AppState::new(link_service);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Opens the storage backend selected by `STORAGE_BACKEND`.
///
/// # Errors
///
/// Returns an error if the backend cannot be initialized.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    let repository: Arc<dyn LinkRepository> = match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; links are lost on restart");
            Arc::new(InMemoryLinkRepository::new())
        }
        StorageBackend::File => {
            let repo = FileLinkRepository::open(&config.data_file)
                .await
                .with_context(|| {
                    format!("Failed to open mapping file {}", config.data_file.display())
                })?;
            Arc::new(repo)
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when STORAGE_BACKEND=postgres")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            Arc::new(PgLinkRepository::new(Arc::new(pool)))
        }
    };

    Ok(repository)
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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

    tracing::info!("Shutdown signal received");
}
