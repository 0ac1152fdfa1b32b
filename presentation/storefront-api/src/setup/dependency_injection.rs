use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::cart::quote::QuoteCartUseCaseImpl;
use business::application::catalog::browse::BrowseCatalogUseCaseImpl;
use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::set_active::SetProductActiveUseCaseImpl;
use business::application::product::set_discount::SetProductDiscountUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::cart::routes::CartApi;
use crate::api::catalog::routes::CatalogApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::AdminProductApi;
use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub cart_api: CartApi,
    pub admin_product_api: AdminProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, catalog_config: &CatalogConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository: Arc<dyn ProductRepository> =
            Arc::new(ProductRepositoryPostgres::new(pool));
        let category_directory = Arc::new(catalog_config.load_directory()?);

        // Catalog use cases
        let browse_use_case = Arc::new(BrowseCatalogUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_categories_use_case = Arc::new(ListCategoriesUseCaseImpl {
            repository: product_repository.clone(),
            directory: category_directory,
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let quote_use_case = Arc::new(QuoteCartUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Admin product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let set_active_use_case = Arc::new(SetProductActiveUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let set_discount_use_case = Arc::new(SetProductDiscountUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let catalog_api = CatalogApi::new(
            browse_use_case,
            list_categories_use_case,
            get_by_id_use_case.clone(),
        );
        let cart_api = CartApi::new(quote_use_case);
        let admin_product_api = AdminProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            set_active_use_case,
            set_discount_use_case,
        );

        Ok(Self {
            health_api: HealthApi,
            catalog_api,
            cart_api,
            admin_product_api,
        })
    }
}
