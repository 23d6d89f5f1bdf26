use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::messenger::OrderHandoff;
use crate::domain::shared::value_objects::SessionId;

pub struct SubmitOrderParams {
    pub session_id: SessionId,
}

/// When the cart is cleared relative to the gateway hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearPolicy {
    /// Clear as soon as the hand-off was attempted (optimistic; the
    /// deep-link flow cannot observe delivery anyway).
    AfterSend,
    /// Clear only once the gateway reports success.
    OnDelivered,
}

#[derive(Debug, Clone)]
pub struct OrderReceipt {
    pub message: String,
    pub handoff: OrderHandoff,
}

#[async_trait]
pub trait SubmitOrderUseCase: Send + Sync {
    async fn execute(&self, params: SubmitOrderParams) -> Result<OrderReceipt, OrderError>;
}
