use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Storage port for products.
///
/// Listing methods return products newest first. Implementations do not
/// validate product invariants; use cases do that before calling `save`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_active(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
