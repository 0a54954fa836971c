//! Database connection settings.
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)
//! - `RUN_MIGRATIONS`: apply embedded migrations at startup (default: true)

use std::env;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = var("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .context("DATABASE_URL must be set")?;

        Ok(Self {
            url,
            max_connections: var("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            run_migrations: var("RUN_MIGRATIONS")
                .map(|s| !matches!(s.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_is_an_error() {
        let err = DatabaseConfig::from_vars(|_| None).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_reads_pool_settings() {
        let config = DatabaseConfig::from_vars(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/educapost".to_string()),
            "DATABASE_MAX_CONNECTIONS" => Some("4".to_string()),
            "RUN_MIGRATIONS" => Some("false".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.url, "postgres://localhost/educapost");
        assert_eq!(config.max_connections, 4);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_migrations_enabled_by_default() {
        let config = DatabaseConfig::from_vars(|key| {
            (key == "DATABASE_URL").then(|| "postgres://localhost/educapost".to_string())
        })
        .unwrap();
        assert_eq!(config.max_connections, 10);
        assert!(config.run_migrations);
    }
}
