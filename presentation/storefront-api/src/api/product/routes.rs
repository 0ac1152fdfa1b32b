use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::set_active::{
    SetProductActiveParams, SetProductActiveUseCase,
};
use business::domain::product::use_cases::set_discount::{
    SetProductDiscountParams, SetProductDiscountUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductResponse, SetActiveRequest, SetDiscountRequest,
    UpdateProductRequest,
};
use crate::api::security::AdminApiKey;
use crate::api::tags::ApiTags;

pub struct AdminProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    set_active_use_case: Arc<dyn SetProductActiveUseCase>,
    set_discount_use_case: Arc<dyn SetProductDiscountUseCase>,
}

impl AdminProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        set_active_use_case: Arc<dyn SetProductActiveUseCase>,
        set_discount_use_case: Arc<dyn SetProductDiscountUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            set_active_use_case,
            set_discount_use_case,
        }
    }
}

/// Product administration API
///
/// Every endpoint requires the `x-api-key` header.
#[OpenApi]
impl AdminProductApi {
    /// List all products
    ///
    /// Includes inactive products, newest first.
    #[oai(path = "/admin/products", method = "get", tag = "ApiTags::Admin")]
    async fn list_products(&self, _auth: AdminApiKey) -> ListProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                ListProductsResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Create a product
    ///
    /// New products start with rating 5 and no reviews.
    #[oai(path = "/admin/products", method = "post", tag = "ApiTags::Admin")]
    async fn create_product(
        &self,
        _auth: AdminApiKey,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            description: body.0.description,
            image_url: body.0.image_url,
            price: body.0.price,
            category: body.0.category,
            stock: body.0.stock,
            active: body.0.active,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Get a product, active or not
    #[oai(path = "/admin/products/:id", method = "get", tag = "ApiTags::Admin")]
    async fn get_product(&self, _auth: AdminApiKey, id: Path<String>) -> ProductMutationResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return ProductMutationResponse::BadRequest(ErrorResponse::invalid_id());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: uuid,
                include_inactive: true,
            })
            .await
        {
            Ok(product) => ProductMutationResponse::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Update a product
    ///
    /// Partial update: omitted fields are left unchanged. A price change that
    /// would leave the current discount at or above the new price is rejected.
    #[oai(path = "/admin/products/:id", method = "put", tag = "ApiTags::Admin")]
    async fn update_product(
        &self,
        _auth: AdminApiKey,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> ProductMutationResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return ProductMutationResponse::BadRequest(ErrorResponse::invalid_id());
        };

        match self
            .update_use_case
            .execute(UpdateProductParams {
                id: uuid,
                changes: body.0.into(),
            })
            .await
        {
            Ok(product) => ProductMutationResponse::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Delete a product
    #[oai(path = "/admin/products/:id", method = "delete", tag = "ApiTags::Admin")]
    async fn delete_product(&self, _auth: AdminApiKey, id: Path<String>) -> DeleteProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(ErrorResponse::invalid_id());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Show or hide a product in the catalog
    #[oai(
        path = "/admin/products/:id/active",
        method = "put",
        tag = "ApiTags::Admin"
    )]
    async fn set_active(
        &self,
        _auth: AdminApiKey,
        id: Path<String>,
        body: Json<SetActiveRequest>,
    ) -> ProductMutationResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return ProductMutationResponse::BadRequest(ErrorResponse::invalid_id());
        };

        match self
            .set_active_use_case
            .execute(SetProductActiveParams {
                id: uuid,
                active: body.0.active,
            })
            .await
        {
            Ok(product) => ProductMutationResponse::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Set or clear a discount
    ///
    /// The discount must be positive and strictly below the base price.
    #[oai(
        path = "/admin/products/:id/discount",
        method = "put",
        tag = "ApiTags::Admin"
    )]
    async fn set_discount(
        &self,
        _auth: AdminApiKey,
        id: Path<String>,
        body: Json<SetDiscountRequest>,
    ) -> ProductMutationResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return ProductMutationResponse::BadRequest(ErrorResponse::invalid_id());
        };

        match self
            .set_discount_use_case
            .execute(SetProductDiscountParams {
                id: uuid,
                discount_price: body.0.discount_price,
            })
            .await
        {
            Ok(product) => ProductMutationResponse::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for ListProductsResponse {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for CreateProductResponse {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductMutationResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for ProductMutationResponse {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for DeleteProductResponse {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::product::create::CreateProductUseCaseImpl;
    use business::application::product::delete::DeleteProductUseCaseImpl;
    use business::application::product::get_all::GetAllProductsUseCaseImpl;
    use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
    use business::application::product::set_active::SetProductActiveUseCaseImpl;
    use business::application::product::set_discount::SetProductDiscountUseCaseImpl;
    use business::application::product::update::UpdateProductUseCaseImpl;
    use business::domain::errors::RepositoryError;
    use business::domain::logger::Logger;
    use business::domain::product::repository::ProductRepository;
    use serde_json::json;

    use crate::api::test_support::{ADMIN_KEY, MockProductRepo, SilentLogger, client, product};

    fn admin_api(repo: MockProductRepo) -> AdminProductApi {
        let repository: Arc<dyn ProductRepository> = Arc::new(repo);
        let logger: Arc<dyn Logger> = Arc::new(SilentLogger);
        AdminProductApi::new(
            Arc::new(GetAllProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CreateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SetProductActiveUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SetProductDiscountUseCaseImpl { repository, logger }),
        )
    }

    #[tokio::test]
    async fn should_reject_request_when_api_key_missing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_all().never();
        let client = client(admin_api(repo));

        let response = client.get("/admin/products").send().await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_request_when_api_key_wrong() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_all().never();
        let client = client(admin_api(repo));

        let response = client
            .get("/admin/products")
            .header("x-api-key", "guess")
            .send()
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_list_inactive_products_for_admin() {
        let mut hidden = product("Paisaje Urbano", 35000.0);
        hidden.active = false;
        let mut repo = MockProductRepo::new();
        repo.expect_get_all()
            .returning(move || Ok(vec![hidden.clone()]));
        let client = client(admin_api(repo));

        let response = client
            .get("/admin/products")
            .header("x-api-key", ADMIN_KEY)
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        json.value().array().assert_len(1);
        json.value()
            .array()
            .get(0)
            .object()
            .get("active")
            .assert_bool(false);
    }

    #[tokio::test]
    async fn should_create_product_with_defaults() {
        let mut repo = MockProductRepo::new();
        repo.expect_save().times(1).returning(|_| Ok(()));
        let client = client(admin_api(repo));

        let response = client
            .post("/admin/products")
            .header("x-api-key", ADMIN_KEY)
            .body_json(&json!({
                "name": "Ilustración Botánica",
                "price": 50000.0,
                "category": "Ilustración"
            }))
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        let body = json.value().object();
        body.get("rating").assert_f64(5.0);
        body.get("stock").assert_i64(0);
        body.get("active").assert_bool(true);
        body.get("formatted_price").assert_string("$ 50.000");
    }

    #[tokio::test]
    async fn should_return_400_when_create_payload_invalid() {
        let mut repo = MockProductRepo::new();
        repo.expect_save().never();
        let client = client(admin_api(repo));

        let response = client
            .post("/admin/products")
            .header("x-api-key", ADMIN_KEY)
            .body_json(&json!({"name": "  ", "price": 50000.0, "category": "Digital"}))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("product.name_empty");
    }

    #[tokio::test]
    async fn should_return_400_when_price_rounds_to_zero_cents() {
        let mut repo = MockProductRepo::new();
        repo.expect_save().never();
        let client = client(admin_api(repo));

        let response = client
            .post("/admin/products")
            .header("x-api-key", ADMIN_KEY)
            .body_json(&json!({"name": "Boceto", "price": 0.004, "category": "Digital"}))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("product.price_not_positive");
    }

    #[tokio::test]
    async fn should_reject_price_update_below_discount() {
        let mut sale = product("Arte Digital Premium", 45000.0);
        sale.discount_price = Some(36000.0);
        let id = sale.id;
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(sale.clone()));
        repo.expect_save().never();
        let client = client(admin_api(repo));

        let response = client
            .put(format!("/admin/products/{id}"))
            .header("x-api-key", ADMIN_KEY)
            .body_json(&json!({"price": 30000.0}))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("product.discount_not_below_price");
    }

    #[tokio::test]
    async fn should_clear_description_when_update_sends_null() {
        let mut print = product("Retrato Minimalista", 12000.0);
        print.description = Some("Trazo a mano".to_string());
        let id = print.id;
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(print.clone()));
        repo.expect_save()
            .times(1)
            .withf(|saved| saved.description.is_none() && saved.name == "Retrato Minimalista")
            .returning(|_| Ok(()));
        let client = client(admin_api(repo));

        let response = client
            .put(format!("/admin/products/{id}"))
            .header("x-api-key", ADMIN_KEY)
            .body_json(&json!({"description": null}))
            .send()
            .await;

        response.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_apply_discount_and_report_percentage() {
        let print = product("Arte Digital Premium", 45000.0);
        let id = print.id;
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(print.clone()));
        repo.expect_save().times(1).returning(|_| Ok(()));
        let client = client(admin_api(repo));

        let response = client
            .put(format!("/admin/products/{id}/discount"))
            .header("x-api-key", ADMIN_KEY)
            .body_json(&json!({"discount_price": 36000.0}))
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let body = json.value().object();
        body.get("discount_percentage").assert_i64(20);
        body.get("effective_price").assert_f64(36000.0);
    }

    #[tokio::test]
    async fn should_return_404_when_deleting_missing_product() {
        let mut repo = MockProductRepo::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));
        let client = client(admin_api(repo));

        let response = client
            .delete(format!("/admin/products/{}", Uuid::new_v4()))
            .header("x-api-key", ADMIN_KEY)
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_deactivate_product() {
        let print = product("Paisaje Urbano", 35000.0);
        let id = print.id;
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(print.clone()));
        repo.expect_save()
            .withf(|p| !p.active)
            .times(1)
            .returning(|_| Ok(()));
        let client = client(admin_api(repo));

        let response = client
            .put(format!("/admin/products/{id}/active"))
            .header("x-api-key", ADMIN_KEY)
            .body_json(&json!({"active": false}))
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        json.value().object().get("active").assert_bool(false);
    }
}
