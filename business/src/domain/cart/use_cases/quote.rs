use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct QuoteLine {
    pub product_id: Uuid,
    pub quantity: u32,
}

pub struct QuoteCartParams {
    pub lines: Vec<QuoteLine>,
}

/// Prices a cart against the current active catalog.
#[async_trait]
pub trait QuoteCartUseCase: Send + Sync {
    async fn execute(&self, params: QuoteCartParams) -> Result<Cart, CartError>;
}
