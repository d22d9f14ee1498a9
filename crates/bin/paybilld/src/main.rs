//! # paybilld — paybill daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`.env`, `paybill.toml`, environment variables)
//! - Initialize logging
//! - Connect the selected storage backend (`MongoDB` or `SQLite`)
//! - Construct application services, injecting the store via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use paybill_adapter_http_axum::router;
use paybill_adapter_http_axum::state::AppState;
use paybill_adapter_storage_mongodb::MongoDocumentStore;
use paybill_adapter_storage_sqlite_sqlx::{SqliteDocumentStore, seed};
use paybill_app::ports::DocumentStore;

use config::{Backend, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();

    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match config.storage.backend {
        Backend::Mongodb => run_mongodb(&config).await,
        Backend::Sqlite => run_sqlite(&config).await,
    }
}

async fn run_mongodb(config: &Config) -> anyhow::Result<()> {
    let db = config
        .mongodb_config()
        .build()
        .await
        .context("failed to configure mongodb client")?;

    // The driver connects lazily; report reachability without holding up
    // the listener.
    let pinger = db.clone();
    tokio::spawn(async move {
        match pinger.ping().await {
            Ok(()) => tracing::info!("connected to mongodb"),
            Err(err) => tracing::error!(error = %err, "mongodb ping failed"),
        }
    });

    let store = MongoDocumentStore::new(&db);
    serve(config, store).await?;

    db.close().await;
    Ok(())
}

async fn run_sqlite(config: &Config) -> anyhow::Result<()> {
    let db = config
        .sqlite_config()
        .build()
        .await
        .context("failed to open sqlite database")?;

    let store = Arc::new(SqliteDocumentStore::new(db.pool().clone()));
    if let Some(path) = &config.sqlite.seed {
        let count = seed::load(&store, path)
            .await
            .with_context(|| format!("failed to seed from {}", path.display()))?;
        tracing::info!(count, path = %path.display(), "seed data loaded");
    }

    serve(config, store).await?;

    db.close().await;
    Ok(())
}

async fn serve<S>(config: &Config, store: S) -> anyhow::Result<()>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let app = router::build(AppState::new(store));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "paybilld listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("paybilld stopped");
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
