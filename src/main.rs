// src/main.rs
use std::net::SocketAddr;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::init as tracing_init;

use influ_catalog::config::Config;
use influ_catalog::error::StartupError;
use influ_catalog::store::PgCatalogStore;
use influ_catalog::{database, routes, schema, state};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    if let Err(e) = run().await {
        error!(error = %e, "Startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    if dotenv().is_err() {
        warn!(".env file not found, using environment variables");
    }

    let config = Config::from_env()?;

    let db_pool = database::create_pool(&config)
        .await
        .map_err(StartupError::Connect)?;
    database::ping(&db_pool).await.map_err(StartupError::Ping)?;
    schema::ensure_schema(&db_pool)
        .await
        .map_err(StartupError::Schema)?;
    info!("Database connected");

    let store = PgCatalogStore::new(db_pool.clone(), config.row_error_policy);
    let app = routes::app(state::AppState::new(store));

    let addr = SocketAddr::from((config.host, config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!("Server running on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db_pool.close().await;
    info!("Database pool closed");

    served.map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C, shutting down"),
        _ = terminate => warn!("Received SIGTERM, shutting down"),
    }
}
