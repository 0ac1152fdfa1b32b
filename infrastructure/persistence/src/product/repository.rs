use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::FromPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const SELECT_COLUMNS: &str = "SELECT id, name, description, image_url, price, discount_price, category, rating, reviews, stock, active, created_at, updated_at FROM products";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Connection-level failures are reported as unavailable so callers may retry.
fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::warn!("Database unavailable: {error}");
            RepositoryError::Unavailable
        }
        _ => {
            tracing::error!("Database error: {error}");
            RepositoryError::DatabaseError
        }
    }
}

/// Money columns hold two decimal places.
fn to_numeric(value: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(value)
        .map(|amount| amount.round(2))
        .ok_or(RepositoryError::DatabaseError)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_active(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_COLUMNS} WHERE active = TRUE ORDER BY created_at DESC NULLS LAST"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC NULLS LAST"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let discount_price = product.discount_price.map(to_numeric).transpose()?;

        sqlx::query(
            r#"INSERT INTO products (id, name, description, image_url, price, discount_price, category, rating, reviews, stock, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                image_url = EXCLUDED.image_url,
                price = EXCLUDED.price,
                discount_price = EXCLUDED.discount_price,
                category = EXCLUDED.category,
                rating = EXCLUDED.rating,
                reviews = EXCLUDED.reviews,
                stock = EXCLUDED.stock,
                active = EXCLUDED.active,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(to_numeric(product.price)?)
        .bind(discount_price)
        .bind(&product.category)
        .bind(product.rating)
        .bind(product.reviews)
        .bind(i32::try_from(product.stock).unwrap_or(i32::MAX))
        .bind(product.active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
