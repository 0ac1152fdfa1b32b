use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: BigDecimal,
    pub discount_price: Option<BigDecimal>,
    pub category: String,
    pub rating: f64,
    pub reviews: f64,
    pub stock: i32,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.image_url,
            self.price.to_f64().unwrap_or_default(),
            self.discount_price.and_then(|d| d.to_f64()),
            self.category,
            self.rating,
            self.reviews,
            u32::try_from(self.stock).unwrap_or_default(),
            self.active,
            self.created_at,
            self.updated_at,
        )
    }
}
