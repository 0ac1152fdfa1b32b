use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct SetProductActiveParams {
    pub id: Uuid,
    pub active: bool,
}

#[async_trait]
pub trait SetProductActiveUseCase: Send + Sync {
    async fn execute(&self, params: SetProductActiveParams) -> Result<Product, ProductError>;
}
