use std::env;

use super::app_config::ConfigError;

/// Shared secret expected in the `x-api-key` header of admin requests.
pub struct AdminConfig {
    pub api_key: String,
}

impl AdminConfig {
    /// Environment variables:
    /// - ADMIN_API_KEY: admin secret (required, non-blank)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(env::var("ADMIN_API_KEY").ok())
    }

    fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        match value.map(|v| v.trim().to_string()) {
            Some(api_key) if !api_key.is_empty() => Ok(Self { api_key }),
            _ => Err(ConfigError::MissingVariable("ADMIN_API_KEY")),
        }
    }
}
