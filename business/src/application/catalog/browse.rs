use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::pipeline;
use crate::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub struct BrowseCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    async fn execute(&self, params: BrowseCatalogParams) -> Result<Vec<Product>, CatalogError> {
        let products = self.repository.get_active().await?;

        let visible: Vec<Product> = pipeline::query(&products, &params.query)
            .into_iter()
            .cloned()
            .collect();

        self.logger.debug(&format!(
            "Catalog query [search={:?}, category={}, sort={}] matched {} of {} products",
            params.query.search_term,
            params.query.category,
            params.query.sort_key,
            visible.len(),
            products.len()
        ));
        Ok(visible)
    }
}
