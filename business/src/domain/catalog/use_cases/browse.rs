use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::query::QuerySpecification;
use crate::domain::product::model::Product;

pub struct BrowseCatalogParams {
    pub query: QuerySpecification,
}

/// Runs the catalog pipeline over the active products.
///
/// Each call is independent. Clients that fire overlapping requests must
/// keep only the response to their latest one.
#[async_trait]
pub trait BrowseCatalogUseCase: Send + Sync {
    async fn execute(&self, params: BrowseCatalogParams) -> Result<Vec<Product>, CatalogError>;
}
