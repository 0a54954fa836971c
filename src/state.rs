use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use educapost_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use educapost_db::{MIGRATOR, PgStore, Store, init_db_pool};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

impl AppState {
    /// State over an arbitrary store with default CORS and server settings.
    pub fn new(store: Arc<dyn Store>, jwt_config: JwtConfig) -> Self {
        Self {
            store,
            jwt_config,
            cors_config: CorsConfig::from_vars(|_| None),
            server_config: ServerConfig::default(),
        }
    }

    pub fn from_env(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            server_config: ServerConfig::from_env(),
        }
    }
}

/// Connects to PostgreSQL, applies pending migrations when enabled, and
/// builds the state around a [`PgStore`].
pub async fn init_app_state(db_config: &DatabaseConfig) -> anyhow::Result<AppState> {
    let pool = init_db_pool(db_config)
        .await
        .context("Failed to connect to database")?;

    if db_config.run_migrations {
        MIGRATOR
            .run(&pool)
            .await
            .context("Failed to apply migrations")?;
        info!("Database migrations applied");
    }

    Ok(AppState::from_env(Arc::new(PgStore::new(pool))))
}
