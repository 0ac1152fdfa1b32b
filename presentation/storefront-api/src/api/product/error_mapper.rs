use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ProductError::Repository(err) => err.into_error_response(),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "product.not_found"),
            ),
            err if err.is_validation() => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", &err.to_string()),
            ),
            err => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("InternalError", &err.to_string()),
            ),
        }
    }
}
