use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct SetProductDiscountParams {
    pub id: Uuid,
    /// `None` clears the discount.
    pub discount_price: Option<f64>,
}

#[async_trait]
pub trait SetProductDiscountUseCase: Send + Sync {
    async fn execute(&self, params: SetProductDiscountParams) -> Result<Product, ProductError>;
}
