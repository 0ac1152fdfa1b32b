use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::quote::{QuoteCartParams, QuoteCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub struct QuoteCartUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl QuoteCartUseCase for QuoteCartUseCaseImpl {
    async fn execute(&self, params: QuoteCartParams) -> Result<Cart, CartError> {
        let catalog: HashMap<Uuid, Product> = self
            .repository
            .get_active()
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut cart = Cart::new();
        for line in params.lines {
            let product = catalog
                .get(&line.product_id)
                .ok_or(CartError::ProductUnavailable(line.product_id))?;
            cart.add(product.clone(), line.quantity)?;
        }

        // Checked after merging so repeated lines count together.
        if let Some(short) = cart.lines().iter().find(|l| l.quantity > l.product.stock) {
            return Err(CartError::InsufficientStock {
                product_id: short.product.id,
                available: short.product.stock,
            });
        }

        self.logger.debug(&format!(
            "Quoted cart with {} items, total {}",
            cart.item_count(),
            cart.total()
        ));
        Ok(cart)
    }
}
