#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.invalid_category_directory")]
    InvalidCategoryDirectory,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
