use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::categories::{CategoryDirectory, CategorySummary};
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct ListCategoriesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub directory: Arc<CategoryDirectory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<CategorySummary>, CatalogError> {
        let products = self.repository.get_active().await?;
        let summaries = self.directory.summarize(&products);

        self.logger.debug(&format!(
            "Listed {} categories over {} active products",
            summaries.len().saturating_sub(1),
            products.len()
        ));
        Ok(summaries)
    }
}
