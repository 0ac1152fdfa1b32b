use chrono::{DateTime, Utc};
use poem_openapi::Object;
use poem_openapi::types::MaybeUndefined;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::pricing::{
    PriceFormat, discount_percentage, effective_price, format_price_cop,
};

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Base price in COP
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub discount_price: Option<f64>,
    /// Price the customer pays: the discount when it is valid, else the base price
    pub effective_price: f64,
    /// Whole-number percentage off, present only for a valid discount
    #[oai(skip_serializing_if_is_none)]
    pub discount_percentage: Option<u32>,
    /// Effective price formatted as Colombian pesos, e.g. "$ 45.000"
    pub formatted_price: String,
    pub category: String,
    pub rating: f64,
    pub reviews: f64,
    pub stock: u32,
    pub active: bool,
    #[oai(skip_serializing_if_is_none)]
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let effective = effective_price(&product);

        Self {
            id: product.id,
            effective_price: effective,
            discount_percentage: discount_percentage(product.price, product.discount_price),
            formatted_price: format_price_cop(Some(effective), PriceFormat::default()),
            name: product.name,
            description: product.description,
            image_url: product.image_url,
            price: product.price,
            discount_price: product.discount_price,
            category: product.category,
            rating: product.rating,
            reviews: product.reviews,
            stock: product.stock,
            active: product.active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Absolute http(s) URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Base price in COP (must be positive)
    pub price: f64,
    /// Category code, e.g. "Digital"
    pub category: String,
    #[oai(default)]
    pub stock: u32,
    /// Defaults to true
    #[oai(skip_serializing_if_is_none)]
    pub active: Option<bool>,
}

/// Partial update. Omitted fields keep their stored value; an explicit
/// `null` clears `description` or `image_url`.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    pub description: MaybeUndefined<String>,
    pub image_url: MaybeUndefined<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub active: Option<bool>,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(request: UpdateProductRequest) -> Self {
        ProductChanges {
            name: request.name,
            description: clearable(request.description),
            image_url: clearable(request.image_url),
            price: request.price,
            category: request.category,
            stock: request.stock,
            active: request.active,
        }
    }
}

fn clearable(value: MaybeUndefined<String>) -> Option<Option<String>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(value) => Some(Some(value)),
    }
}

#[derive(Debug, Clone, Object)]
pub struct SetActiveRequest {
    pub active: bool,
}

#[derive(Debug, Clone, Object)]
pub struct SetDiscountRequest {
    /// Promotional price in COP. Null or omitted clears the discount.
    #[oai(skip_serializing_if_is_none)]
    pub discount_price: Option<f64>,
}
