use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path},
    payload::Json,
};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use business::domain::order::use_cases::submit::{SubmitOrderParams, SubmitOrderUseCase};
use business::domain::shared::value_objects::SessionId;

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, SubmitOrderResponse, UpdateCartItemQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    submit_order_use_case: Arc<dyn SubmitOrderUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        submit_order_use_case: Arc<dyn SubmitOrderUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            get_cart_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
            submit_order_use_case,
        }
    }
}

fn session_from_header(raw: &str) -> Result<SessionId, Json<ErrorResponse>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Json(ErrorResponse {
            name: "ValidationError".to_string(),
            message: "session.missing".to_string(),
        }));
    }
    Ok(SessionId::new(trimmed.to_string()))
}

/// Cart API
///
/// Session-scoped cart operations. Every endpoint identifies the cart with
/// the X-Session-Id header; carts for different sessions never interact.
#[OpenApi]
impl CartApi {
    /// Get the session cart
    ///
    /// Returns the cart for this session, with recomputed totals. An unknown
    /// session yields an empty cart.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
    ) -> GetCartResponse {
        let session_id = match session_from_header(&session_id.0) {
            Ok(id) => id,
            Err(json) => return GetCartResponse::BadRequest(json),
        };

        match self.get_cart_use_case.execute(GetCartParams { session_id }).await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add an item to the cart
    ///
    /// Adds one unit of the given weight tier, merging into the existing
    /// line when the pair is already present. The unit price is resolved
    /// against the catalog at add time and locked for the cart's lifetime.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        body: Json<AddCartItemRequest>,
    ) -> AddCartItemResponse {
        let session_id = match session_from_header(&session_id.0) {
            Ok(id) => id,
            Err(json) => return AddCartItemResponse::BadRequest(json),
        };

        let params = AddCartItemParams {
            session_id,
            product_id: body.0.product_id,
            weight: body.0.weight,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => AddCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddCartItemResponse::NotFound(json),
                    422 => AddCartItemResponse::UnprocessableEntity(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Set a line item's quantity
    ///
    /// Sets the quantity of an existing line item. Zero or negative removes
    /// the line; unknown (product, weight) pairs are a no-op.
    #[oai(path = "/cart/items", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        body: Json<UpdateCartItemQuantityRequest>,
    ) -> UpdateCartItemResponse {
        let session_id = match session_from_header(&session_id.0) {
            Ok(id) => id,
            Err(json) => return UpdateCartItemResponse::BadRequest(json),
        };

        let params = UpdateCartItemQuantityParams {
            session_id,
            product_id: body.0.product_id,
            weight: body.0.weight,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(cart) => UpdateCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateCartItemResponse::InternalError(json)
            }
        }
    }

    /// Remove a line item
    ///
    /// Removes the matching line item regardless of quantity. Removing an
    /// absent item is a no-op, not an error.
    #[oai(
        path = "/cart/items/:product_id/:weight",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        product_id: Path<String>,
        weight: Path<String>,
    ) -> RemoveCartItemResponse {
        let session_id = match session_from_header(&session_id.0) {
            Ok(id) => id,
            Err(json) => return RemoveCartItemResponse::BadRequest(json),
        };

        let params = RemoveCartItemParams {
            session_id,
            product_id: product_id.0,
            weight: weight.0,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(cart) => RemoveCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveCartItemResponse::InternalError(json)
            }
        }
    }

    /// Clear the cart
    ///
    /// Empties the session cart. Always succeeds, even when already empty.
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
    ) -> ClearCartResponse {
        let session_id = match session_from_header(&session_id.0) {
            Ok(id) => id,
            Err(json) => return ClearCartResponse::BadRequest(json),
        };

        match self.clear_use_case.execute(ClearCartParams { session_id }).await {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }

    /// Submit the cart as an order
    ///
    /// Formats the cart into an order message and hands it to the configured
    /// Telegram channel. An empty cart is rejected before any delivery
    /// attempt.
    #[oai(path = "/cart/submit", method = "post", tag = "ApiTags::Cart")]
    async fn submit_order(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
    ) -> SubmitOrderApiResponse {
        let session_id = match session_from_header(&session_id.0) {
            Ok(id) => id,
            Err(json) => return SubmitOrderApiResponse::BadRequest(json),
        };

        match self
            .submit_order_use_case
            .execute(SubmitOrderParams { session_id })
            .await
        {
            Ok(receipt) => SubmitOrderApiResponse::Ok(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => SubmitOrderApiResponse::UnprocessableEntity(json),
                    502 => SubmitOrderApiResponse::BadGateway(json),
                    _ => SubmitOrderApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitOrderApiResponse {
    #[oai(status = 200)]
    Ok(Json<SubmitOrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
