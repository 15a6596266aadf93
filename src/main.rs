use anyhow::Context;
use tracing_subscriber::EnvFilter;

use campus_connect_api::{config, database::DatabaseManager, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DB_user, DB_pass, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!(
        "Starting Campus Connect API in {:?} mode with {:?} store",
        config.environment,
        config.database.backend
    );

    // One store handle for the life of the process
    let db = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect document store")?;

    let app = routes::app(db, config);

    let bind_addr = format!("{}:{}", config.api.bind_address, config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("server is running on {}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
