use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            CartError::Repository(err) => err.into_error_response(),
            CartError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", &message),
            ),
            CartError::ItemNotFound(_) | CartError::ProductUnavailable(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", &message),
            ),
            CartError::InsufficientStock { available, .. } => (
                StatusCode::CONFLICT,
                ErrorResponse::new("InsufficientStock", &format!("{message}:{available}")),
            ),
        }
    }
}
