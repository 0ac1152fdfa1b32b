use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_active::GetActiveProductsUseCase;

pub struct GetActiveProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetActiveProductsUseCase for GetActiveProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching active products");
        let products = self.repository.get_active().await?;
        self.logger
            .info(&format!("Found {} active products", products.len()));
        Ok(products)
    }
}
