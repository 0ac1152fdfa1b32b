use poem_openapi::Object;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartLine};
use business::domain::cart::use_cases::quote::QuoteLine;
use business::domain::product::pricing::{PriceFormat, format_price_cop};

#[derive(Debug, Clone, Object)]
pub struct QuoteItemRequest {
    pub product_id: Uuid,
    pub quantity: u32,
}

impl From<QuoteItemRequest> for QuoteLine {
    fn from(item: QuoteItemRequest) -> Self {
        QuoteLine {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct QuoteCartRequest {
    /// Repeated products are merged into one line
    pub items: Vec<QuoteItemRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub product_id: Uuid,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub unit_price: f64,
    pub quantity: u32,
    pub subtotal: f64,
    pub formatted_subtotal: String,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        let subtotal = line.subtotal();
        Self {
            product_id: line.product.id,
            name: line.product.name.clone(),
            image_url: line.product.image_url.clone(),
            unit_price: line.unit_price(),
            quantity: line.quantity,
            subtotal,
            formatted_subtotal: format_price_cop(Some(subtotal), PriceFormat::default()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartQuoteResponse {
    pub lines: Vec<CartLineResponse>,
    pub item_count: u32,
    pub total: f64,
    pub formatted_total: String,
}

impl From<Cart> for CartQuoteResponse {
    fn from(cart: Cart) -> Self {
        let total = cart.total();
        Self {
            lines: cart.lines().iter().map(CartLineResponse::from).collect(),
            item_count: cart.item_count(),
            total,
            formatted_total: format_price_cop(Some(total), PriceFormat::default()),
        }
    }
}
