#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_not_positive")]
    PriceNotPositive,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.invalid_image_url")]
    InvalidImageUrl,
    #[error("product.discount_not_positive")]
    DiscountNotPositive,
    #[error("product.discount_not_below_price")]
    DiscountNotBelowPrice,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Returns true when the caller supplied bad input shape or values.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::NameEmpty
                | ProductError::PriceNotPositive
                | ProductError::CategoryEmpty
                | ProductError::InvalidImageUrl
                | ProductError::DiscountNotPositive
                | ProductError::DiscountNotBelowPrice
        )
    }
}
