use std::env;
use std::fs;

use anyhow::Context;
use business::domain::catalog::categories::CategoryDirectory;

/// Where the category display table comes from.
pub struct CatalogConfig {
    pub categories_path: Option<String>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_CATEGORIES_PATH: JSON file mapping category codes to
    ///   `{display_name, icon}` (optional, built-in table when unset)
    pub fn from_env() -> Self {
        Self {
            categories_path: env::var("CATALOG_CATEGORIES_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
        }
    }

    pub fn load_directory(&self) -> anyhow::Result<CategoryDirectory> {
        let Some(path) = &self.categories_path else {
            return Ok(CategoryDirectory::default());
        };

        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read category table at {path}"))?;
        let directory = CategoryDirectory::from_json(&json)
            .with_context(|| format!("invalid category table at {path}"))?;
        tracing::info!("Loaded {} categories from {path}", directory.len());
        Ok(directory)
    }
}
