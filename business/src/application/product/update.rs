use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Verify product exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if params.changes.is_empty() {
            self.logger
                .debug(&format!("No field changes for product: {}", params.id));
        }

        let updated = existing.with_changes(params.changes)?;
        self.repository.save(&updated).await?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductChanges;
    use crate::test_support::{MockProductRepo, mock_logger, product};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_merge_changes_when_product_exists() {
        let existing = product("Retrato Minimalista", 12.0);
        let id = existing.id;
        let created_at = existing.created_at;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateProductParams {
                id,
                changes: ProductChanges {
                    name: Some("Retrato Minimalista II".to_string()),
                    stock: Some(0),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Retrato Minimalista II");
        assert_eq!(updated.stock, 0);
        assert_eq!(updated.price, 12.0);
        assert_eq!(updated.created_at, created_at);
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                changes: ProductChanges {
                    price: Some(10.0),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_not_save_when_changes_invalid() {
        let existing = product("Retrato Minimalista", 12.0);
        let id = existing.id;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id,
                changes: ProductChanges {
                    category: Some("  ".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryEmpty));
    }

    #[tokio::test]
    async fn should_refresh_updated_at_when_changes_empty() {
        let existing = product("Retrato Minimalista", 12.0);
        let id = existing.id;
        let previous_update = existing.updated_at;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo
            .expect_save()
            .times(1)
            .withf(move |saved| saved.updated_at > previous_update)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id,
                changes: ProductChanges::default(),
            })
            .await;

        let updated = result.unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Retrato Minimalista");
        assert!(updated.updated_at > previous_update);
    }
}
