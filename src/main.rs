use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use educapost::logging::init_logging;
use educapost::router::init_router;
use educapost::state::init_app_state;
use educapost_config::DatabaseConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let db_config = DatabaseConfig::from_env()?;
    let state = init_app_state(&db_config).await?;

    if state.jwt_config.uses_dev_secret() {
        warn!("Using the development JWT secret; set JWT_SECRET before deploying");
    }

    let address = state.server_config.bind_address();
    let app_name = state.server_config.app_name.clone();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("🚀 {} API listening on http://{}", app_name, address);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
