use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use strum::IntoEnumIterator;
use uuid::Uuid;

use business::domain::catalog::query::{FilterTag, QuerySpecification, RawQuery, SortKey};
use business::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use business::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};

use crate::api::catalog::dto::{CategoryResponse, FiltersResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    browse_use_case: Arc<dyn BrowseCatalogUseCase>,
    list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
}

impl CatalogApi {
    pub fn new(
        browse_use_case: Arc<dyn BrowseCatalogUseCase>,
        list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    ) -> Self {
        Self {
            browse_use_case,
            list_categories_use_case,
            get_by_id_use_case,
        }
    }
}

/// Public catalog API
///
/// Read-only endpoints over the active products.
#[OpenApi]
impl CatalogApi {
    /// Browse the catalog
    ///
    /// Applies search, category, tag filters and one ordering to the active
    /// products. `filters` is a comma-separated list of `new`, `bestseller`
    /// and `discount`; unknown tags are ignored. `sort` is one of `recent`,
    /// `price-low`, `price-high` or `rating` and defaults to `recent`.
    /// Selecting `bestseller` orders by review count regardless of `sort`.
    ///
    /// Requests are independent. A client that fires several in a row must
    /// keep only the response to its latest request.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn browse_catalog(
        &self,
        search: Query<Option<String>>,
        category: Query<Option<String>>,
        filters: Query<Option<String>>,
        sort: Query<Option<String>>,
    ) -> BrowseCatalogResponse {
        let (query, unknown_tags) = QuerySpecification::from_raw(RawQuery {
            search: search.0.as_deref(),
            category: category.0.as_deref(),
            filters: filters.0.as_deref(),
            sort: sort.0.as_deref(),
        });
        if !unknown_tags.is_empty() {
            tracing::warn!("Ignoring unknown catalog filters: {}", unknown_tags.join(", "));
        }

        match self
            .browse_use_case
            .execute(BrowseCatalogParams { query })
            .await
        {
            Ok(products) => {
                BrowseCatalogResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Get an active product
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product(&self, id: Path<String>) -> GetCatalogProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetCatalogProductResponse::BadRequest(ErrorResponse::invalid_id());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: uuid,
                include_inactive: false,
            })
            .await
        {
            Ok(product) => GetCatalogProductResponse::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// List categories
    ///
    /// The first entry is `all`, followed by every category that has active
    /// products, sorted by display name.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn list_categories(&self) -> ListCategoriesResponse {
        match self.list_categories_use_case.execute().await {
            Ok(summaries) => {
                ListCategoriesResponse::Ok(Json(summaries.into_iter().map(Into::into).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }

    /// List filter tags and sort options
    #[oai(path = "/filters", method = "get", tag = "ApiTags::Catalog")]
    async fn list_filters(&self) -> Json<FiltersResponse> {
        Json(FiltersResponse {
            filters: FilterTag::iter().map(Into::into).collect(),
            sort_options: SortKey::iter().map(Into::into).collect(),
        })
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BrowseCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for BrowseCatalogResponse {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCatalogProductResponse {
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

impl From<(StatusCode, Json<ErrorResponse>)> for GetCatalogProductResponse {
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
pub enum ListCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for ListCategoriesResponse {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}
