use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::set_discount::{
    SetProductDiscountParams, SetProductDiscountUseCase,
};

pub struct SetProductDiscountUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetProductDiscountUseCase for SetProductDiscountUseCaseImpl {
    async fn execute(&self, params: SetProductDiscountParams) -> Result<Product, ProductError> {
        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let updated = product.with_discount(params.discount_price).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected discount for product {}: {e}", params.id))
        })?;
        self.repository.save(&updated).await?;

        match updated.discount_price {
            Some(discount) => self.logger.info(&format!(
                "Product {} discounted from {} to {}",
                updated.id, updated.price, discount
            )),
            None => self
                .logger
                .info(&format!("Discount cleared for product {}", updated.id)),
        }
        Ok(updated)
    }
}
