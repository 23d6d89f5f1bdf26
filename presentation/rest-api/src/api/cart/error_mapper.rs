use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;
use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "cart.product_not_found")
            }
            CartError::TierUnavailable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "cart.tier_unavailable",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::CartEmpty => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "order.cart_empty",
            ),
            OrderError::DeliveryFailed => (
                StatusCode::BAD_GATEWAY,
                "DeliveryError",
                "order.delivery_failed",
            ),
            OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
