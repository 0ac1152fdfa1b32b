use super::{
    admin_config::AdminConfig, catalog_config::CatalogConfig, cors_config,
    database_config::DatabaseSettings, server_config::ServerConfig,
};
use poem::middleware::Cors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_variable: {name}={value}")]
    InvalidVariable { name: &'static str, value: String },
}

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub catalog: CatalogConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            catalog: CatalogConfig::from_env(),
            admin: AdminConfig::from_env()?,
        })
    }
}
