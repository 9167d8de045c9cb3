//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, service wiring, and the Axum server lifecycle.

use crate::application::services::{DynShortenerService, ShortenerService};
use crate::config::Config;
use crate::domain::MappingStore;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::{InMemoryMappingRepository, PgMappingRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::{AliasGenerator, RandomAliasGenerator};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool using the configured pool settings.
///
/// # Errors
///
/// Returns an error if the database cannot be reached.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Selects the mapping repository from configuration.
///
/// With a database configured, connects and applies pending migrations.
/// Otherwise falls back to the in-memory store.
///
/// # Errors
///
/// Returns an error if the database connection or migrations fail.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn MappingRepository>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("No database configured, mappings will not survive a restart");
        return Ok(Arc::new(InMemoryMappingRepository::new()));
    };

    let pool = connect_pool(config, database_url).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    Ok(Arc::new(PgMappingRepository::new(Arc::new(pool))))
}

/// Wires repository, generator, store and service.
pub fn build_service(
    config: &Config,
    repository: Arc<dyn MappingRepository>,
) -> Arc<DynShortenerService> {
    let generator: Arc<dyn AliasGenerator> =
        Arc::new(RandomAliasGenerator::new(config.alias_length));

    let store = MappingStore::with_max_attempts(repository, generator, config.alias_max_attempts);

    Arc::new(ShortenerService::new(Arc::new(store)))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping repository (PostgreSQL with migrations, or in-memory)
/// - Shortener service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let state = AppState::new(build_service(&config, repository));

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

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
