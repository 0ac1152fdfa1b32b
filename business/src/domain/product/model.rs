use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::pricing::round_to_cents;

/// Rating assigned to every newly created product.
pub const DEFAULT_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub category: String,
    pub rating: f64,
    /// Review count in thousands.
    pub reviews: f64,
    pub stock: u32,
    pub active: bool,
    /// Missing for records imported without a creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub active: Option<bool>,
}

/// Partial update. `None` leaves the current value untouched.
///
/// Optional fields take `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub active: Option<bool>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock.is_none()
            && self.active.is_none()
    }
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_name(&props.name)?;
        let price = validate_price(props.price)?;
        validate_category(&props.category)?;
        if let Some(url) = &props.image_url {
            validate_image_url(url)?;
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name.trim().to_string(),
            description: props.description,
            image_url: props.image_url,
            price,
            discount_price: None,
            category: props.category.trim().to_string(),
            rating: DEFAULT_RATING,
            reviews: 0.0,
            stock: props.stock,
            active: props.active.unwrap_or(true),
            created_at: Some(now),
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        image_url: Option<String>,
        price: f64,
        discount_price: Option<f64>,
        category: String,
        rating: f64,
        reviews: f64,
        stock: u32,
        active: bool,
        created_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            image_url,
            price,
            discount_price,
            category,
            rating,
            reviews,
            stock,
            active,
            created_at,
            updated_at,
        }
    }

    /// Returns a copy with `changes` merged in and `updated_at` refreshed.
    ///
    /// The merged product is validated as a whole, so lowering the price
    /// below an existing discount is rejected.
    pub fn with_changes(&self, changes: ProductChanges) -> Result<Self, ProductError> {
        let mut updated = self.clone();

        if let Some(name) = changes.name {
            validate_name(&name)?;
            updated.name = name.trim().to_string();
        }
        if let Some(price) = changes.price {
            updated.price = validate_price(price)?;
        }
        if let Some(category) = changes.category {
            validate_category(&category)?;
            updated.category = category.trim().to_string();
        }
        if let Some(image_url) = changes.image_url {
            if let Some(url) = &image_url {
                validate_image_url(url)?;
            }
            updated.image_url = image_url;
        }
        if let Some(description) = changes.description {
            updated.description = description;
        }
        if let Some(stock) = changes.stock {
            updated.stock = stock;
        }
        if let Some(active) = changes.active {
            updated.active = active;
        }

        if let Some(discount) = updated.discount_price
            && discount >= updated.price
        {
            return Err(ProductError::DiscountNotBelowPrice);
        }

        updated.updated_at = Utc::now();
        Ok(updated)
    }

    pub fn with_active(&self, active: bool) -> Self {
        Self {
            active,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Sets or clears the promotional price. The discount is rounded to
    /// cents before it is compared with the price.
    pub fn with_discount(&self, discount_price: Option<f64>) -> Result<Self, ProductError> {
        let discount_price = match discount_price {
            Some(discount) => {
                if !discount.is_finite() {
                    return Err(ProductError::DiscountNotPositive);
                }
                let discount = round_to_cents(discount);
                if discount <= 0.0 {
                    return Err(ProductError::DiscountNotPositive);
                }
                if discount >= round_to_cents(self.price) {
                    return Err(ProductError::DiscountNotBelowPrice);
                }
                Some(discount)
            }
            None => None,
        };

        Ok(Self {
            discount_price,
            updated_at: Utc::now(),
            ..self.clone()
        })
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

/// Returns the price rounded to cents. Amounts that round to zero are rejected.
fn validate_price(price: f64) -> Result<f64, ProductError> {
    if !price.is_finite() {
        return Err(ProductError::PriceNotPositive);
    }
    let price = round_to_cents(price);
    if price <= 0.0 {
        return Err(ProductError::PriceNotPositive);
    }
    Ok(price)
}

fn validate_category(category: &str) -> Result<(), ProductError> {
    if category.trim().is_empty() {
        return Err(ProductError::CategoryEmpty);
    }
    Ok(())
}

fn validate_image_url(image_url: &str) -> Result<(), ProductError> {
    url::Url::parse(image_url).map_err(|_| ProductError::InvalidImageUrl)?;
    Ok(())
}
