use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CatalogError::Repository(err) => err.into_error_response(),
            CatalogError::InvalidCategoryDirectory => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("InternalError", "catalog.invalid_category_directory"),
            ),
        }
    }
}
