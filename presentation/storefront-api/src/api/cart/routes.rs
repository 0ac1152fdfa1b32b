use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::cart::use_cases::quote::{QuoteCartParams, QuoteCartUseCase};

use crate::api::cart::dto::{CartQuoteResponse, QuoteCartRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    quote_use_case: Arc<dyn QuoteCartUseCase>,
}

impl CartApi {
    pub fn new(quote_use_case: Arc<dyn QuoteCartUseCase>) -> Self {
        Self { quote_use_case }
    }
}

#[OpenApi]
impl CartApi {
    /// Quote a cart
    ///
    /// Prices the requested items against the current active catalog, using
    /// each product's effective price. Nothing is reserved or stored.
    #[oai(path = "/cart/quote", method = "post", tag = "ApiTags::Cart")]
    async fn quote_cart(&self, body: Json<QuoteCartRequest>) -> QuoteCartResponse {
        let params = QuoteCartParams {
            lines: body.0.items.into_iter().map(Into::into).collect(),
        };

        match self.quote_use_case.execute(params).await {
            Ok(cart) => QuoteCartResponse::Ok(Json(cart.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum QuoteCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartQuoteResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for QuoteCartResponse {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            409 => Self::Conflict(json),
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}
