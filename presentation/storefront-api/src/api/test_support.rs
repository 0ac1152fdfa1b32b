use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use poem::test::TestClient;
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::{OpenApi, OpenApiService};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use crate::api::security::AdminKey;

pub const ADMIN_KEY: &str = "test-admin-key";

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_active(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

pub struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

pub fn product(name: &str, price: f64) -> Product {
    let created = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    Product::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        None,
        None,
        price,
        None,
        "Digital".to_string(),
        5.0,
        0.0,
        10,
        true,
        Some(created),
        created,
    )
}

/// Serves `api` in-process with the admin key installed as request data.
pub fn client<T: OpenApi + 'static>(api: T) -> TestClient<impl Endpoint> {
    let service = OpenApiService::new(api, "storefront-test", "0.0.0");
    TestClient::new(
        Route::new()
            .nest("/", service)
            .data(AdminKey(ADMIN_KEY.to_string())),
    )
}
