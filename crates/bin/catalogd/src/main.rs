//! # catalogd — service catalog daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize tracing
//! - Open the database pool for the configured backend and run migrations
//! - Seed the built-in services when the catalog is empty
//! - Build the axum router, injecting the catalog service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use catalog_adapter_http_axum::state::AppState;
use catalog_adapter_storage_postgres_sqlx::{PostgresServiceRepository, Target};
use catalog_adapter_storage_sqlite_sqlx::SqliteServiceRepository;
use catalog_app::ports::ServiceRepository;
use catalog_app::seed::default_services;
use catalog_app::services::catalog_service::CatalogService;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DatabaseTarget};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;

    let max_connections = config.database.max_connections;
    let seed = config.seed.enabled;
    match config.database.target()? {
        DatabaseTarget::Sqlite(database_url) => {
            tracing::info!(backend = "sqlite", url = %database_url, "opening database");
            let db = catalog_adapter_storage_sqlite_sqlx::Config {
                database_url,
                max_connections,
            }
            .build()
            .await
            .context("opening sqlite database")?;
            serve(listener, SqliteServiceRepository::new(db.pool().clone()), seed).await
        }
        DatabaseTarget::PostgresUrl(url) => {
            tracing::info!(backend = "postgres", "opening database from url");
            let repo = open_postgres(Target::Url(url), max_connections).await?;
            serve(listener, repo, seed).await
        }
        DatabaseTarget::PostgresServer {
            host,
            port,
            user,
            password,
            name,
        } => {
            tracing::info!(backend = "postgres", %host, port, database = %name, "opening database");
            let target = Target::Server {
                host,
                port,
                user,
                password,
                database: name,
            };
            let repo = open_postgres(target, max_connections).await?;
            serve(listener, repo, seed).await
        }
    }
}

async fn open_postgres(
    target: Target,
    max_connections: u32,
) -> anyhow::Result<PostgresServiceRepository> {
    let db = catalog_adapter_storage_postgres_sqlx::Config {
        target,
        max_connections,
    }
    .build()
    .await
    .context("opening postgres database")?;
    Ok(PostgresServiceRepository::new(db.pool().clone()))
}

async fn serve<R>(listener: TcpListener, repo: R, seed: bool) -> anyhow::Result<()>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    let catalog_service = CatalogService::new(repo);

    if seed {
        let inserted = catalog_service
            .seed_if_empty(default_services())
            .await
            .context("seeding services")?;
        tracing::info!(inserted, "seed complete");
    }

    let app = catalog_adapter_http_axum::router::build(AppState::new(catalog_service));

    tracing::info!(addr = %listener.local_addr()?, "catalogd listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("catalogd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
