use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::SessionId;

pub struct UpdateCartItemQuantityParams {
    pub session_id: SessionId,
    pub product_id: String,
    pub weight: String,
    /// Zero or negative removes the line item.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateCartItemQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError>;
}
