use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use rental_api::{app, load_env_file, state::AppState};
use rental_store::{app_config::Config, DbClient, PgProductRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before tracing so RUST_LOG can come from the file too.
    let env_file = load_env_file(None);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rental_api=debug,rental_core=debug,rental_store=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = &env_file {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Product Rental API on port {}", config.server.port);

    let db = DbClient::connect(&config.database)
        .await
        .context("Failed to connect to PostgreSQL")?;
    let db = Arc::new(db);

    let repo = Arc::new(PgProductRepository::new(db.pool.clone()));
    let app_state = AppState::new(repo).with_db(db.clone());

    let app = app(app_state, &config.cors.allowed_origins);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.pool.close().await;
    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
