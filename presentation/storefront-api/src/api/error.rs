use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::RepositoryError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }

    pub fn invalid_id() -> Json<Self> {
        Self::new("ValidationError", "product.invalid_id")
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

impl IntoErrorResponse for RepositoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RepositoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            RepositoryError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "TransientError"),
            RepositoryError::DatabaseError => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };
        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
