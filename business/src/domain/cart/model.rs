use uuid::Uuid;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::product::pricing::effective_price;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn unit_price(&self) -> f64 {
        effective_price(&self.product)
    }

    pub fn subtotal(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

/// Products a shopper intends to buy, in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` units, merging with an existing line for the same product.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }
        Ok(())
    }

    /// Sets the quantity of an existing line. Zero removes the line.
    pub fn update_quantity(&mut self, product_id: Uuid, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            self.remove(product_id);
            return Ok(());
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Returns true if a line was removed.
    pub fn remove(&mut self, product_id: Uuid) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total units across lines. Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, l| count.saturating_add(l.quantity))
    }
}
