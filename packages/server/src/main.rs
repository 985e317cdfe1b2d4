use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scenario_server::config::AppConfig;
use scenario_server::database;
use scenario_server::state::AppState;
use scenario_server::store::MongoScenarioStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = database::init_db(&config.database)
        .await
        .context("Failed to initialize MongoDB client")?;
    info!(database = %config.database.name, "MongoDB client ready");
    database::ensure_indexes(&db).await;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        store: Arc::new(MongoScenarioStore::new(&db)),
        config,
    };

    let app = scenario_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
