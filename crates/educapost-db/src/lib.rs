//! # EducaPost DB
//!
//! Persistence for the EducaPost API.
//!
//! - [`store`]: the [`Store`] trait every handler talks to, and [`StoreError`]
//! - [`postgres`]: [`PgStore`], the PostgreSQL implementation
//! - [`memory`]: [`MemoryStore`], an in-process implementation for tests
//!
//! # Example
//!
//! ```ignore
//! use educapost_config::DatabaseConfig;
//! use educapost_db::{MIGRATOR, PgStore, init_db_pool};
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = init_db_pool(&config).await?;
//! MIGRATOR.run(&pool).await?;
//! let store = Arc::new(PgStore::new(pool));
//! ```

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use educapost_config::DatabaseConfig;

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::{Store, StoreError, StoreResult};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Schema migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Pool options sized by `DATABASE_MAX_CONNECTIONS`.
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new().max_connections(config.max_connections)
}

/// Opens a PostgreSQL pool with [`pool_options`].
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect(&config.url).await
}
