use persistence::db::{
    DEFAULT_MAX_CONNECTIONS, DatabaseConfig, create_postgres_pool, run_migrations,
};
use sqlx::PgPool;
use std::env;

use super::app_config::ConfigError;

pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: Option<String>,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - DATABASE_MIGRATIONS_PATH: migrations directory, applied at startup when set
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVariable("DATABASE_URL"))?;
        let max_connections =
            parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok().as_deref())?;
        let migrations_path = env::var("DATABASE_MIGRATIONS_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

fn parse_max_connections(value: Option<&str>) -> Result<u32, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_MAX_CONNECTIONS),
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ConfigError::InvalidVariable {
                name: "DATABASE_MAX_CONNECTIONS",
                value: raw.to_string(),
            }),
    }
}

/// Initialize the database connection pool, running migrations when configured
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;

    if let Some(path) = &settings.migrations_path {
        run_migrations(&pool, path).await?;
        tracing::info!("Migrations applied from {path}");
    }

    Ok(pool)
}
