use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.item_not_found")]
    ItemNotFound(Uuid),
    #[error("cart.product_unavailable")]
    ProductUnavailable(Uuid),
    #[error("cart.insufficient_stock")]
    InsufficientStock { product_id: Uuid, available: u32 },
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
