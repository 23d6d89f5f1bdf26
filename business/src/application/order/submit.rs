use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::formatter::format_order;
use crate::domain::order::messenger::OrderGateway;
use crate::domain::order::use_cases::submit::{
    ClearPolicy, OrderReceipt, SubmitOrderParams, SubmitOrderUseCase,
};
use crate::domain::settings::repository::SettingsRepository;

pub struct SubmitOrderUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub settings: Arc<dyn SettingsRepository>,
    pub gateway: Arc<dyn OrderGateway>,
    pub clear_policy: ClearPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitOrderUseCase for SubmitOrderUseCaseImpl {
    async fn execute(&self, params: SubmitOrderParams) -> Result<OrderReceipt, OrderError> {
        let cart = self.store.load(&params.session_id).await?;
        if cart.is_empty() {
            // The formatter is never reached with an empty cart.
            return Err(OrderError::CartEmpty);
        }

        let settings = self.settings.get().await?.unwrap_or_default();
        let message = format_order(&settings.shop_title, &cart, Utc::now());

        self.logger.info(&format!(
            "Submitting order for session {}: {} items, total {:.2}",
            params.session_id,
            cart.total_items(),
            cart.total_price()
        ));

        let outcome = self.gateway.deliver(&message, &settings.order_handle).await;

        let clear = match self.clear_policy {
            ClearPolicy::AfterSend => true,
            ClearPolicy::OnDelivered => outcome.is_ok(),
        };
        if clear {
            self.store.remove(&params.session_id).await?;
        }

        match outcome {
            Ok(handoff) => Ok(OrderReceipt { message, handoff }),
            Err(err) => {
                self.logger
                    .error(&format!("Order delivery failed: {err}"));
                Err(OrderError::DeliveryFailed)
            }
        }
    }
}
