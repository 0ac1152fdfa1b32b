use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::set_active::{
    SetProductActiveParams, SetProductActiveUseCase,
};

pub struct SetProductActiveUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetProductActiveUseCase for SetProductActiveUseCaseImpl {
    async fn execute(&self, params: SetProductActiveParams) -> Result<Product, ProductError> {
        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if product.active == params.active {
            return Ok(product);
        }

        let updated = product.with_active(params.active);
        self.repository.save(&updated).await?;

        self.logger.info(&format!(
            "Product {} is now {}",
            updated.id,
            if updated.active { "active" } else { "inactive" }
        ));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProductRepo, mock_logger, product};

    #[tokio::test]
    async fn should_hide_product_when_deactivated() {
        let existing = product("Paisaje Urbano", 35.0);
        let id = existing.id;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo
            .expect_save()
            .withf(|p| !p.active)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SetProductActiveUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(SetProductActiveParams { id, active: false })
            .await
            .unwrap();

        assert!(!updated.active);
    }

    #[tokio::test]
    async fn should_not_save_when_flag_unchanged() {
        let existing = product("Paisaje Urbano", 35.0);
        let id = existing.id;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_save().never();

        let use_case = SetProductActiveUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetProductActiveParams { id, active: true })
            .await;

        assert!(result.unwrap().active);
    }

    #[tokio::test]
    async fn should_propagate_unavailable_when_store_down() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::unavailable()));

        let use_case = SetProductActiveUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetProductActiveParams {
                id: uuid::Uuid::new_v4(),
                active: true,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Unavailable)
        ));
    }
}
