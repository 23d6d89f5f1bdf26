use async_trait::async_trait;
use url::Url;

use business::domain::order::messenger::{DeliveryError, OrderGateway, OrderHandoff};

const TELEGRAM_BASE: &str = "https://t.me";

/// Deep-link hand-off: no server-side delivery at all. The gateway builds a
/// `t.me` URL with the order text pre-filled and the storefront opens it in
/// the customer's own Telegram client.
pub struct DeepLinkGateway;

#[async_trait]
impl OrderGateway for DeepLinkGateway {
    async fn deliver(
        &self,
        message: &str,
        recipient: &str,
    ) -> Result<OrderHandoff, DeliveryError> {
        // Defensive: handles are stored without '@', but strip one anyway.
        let handle = recipient.trim_start_matches('@');

        let mut url = Url::parse(TELEGRAM_BASE)
            .and_then(|base| base.join(handle))
            .map_err(|_| DeliveryError::Rejected)?;
        url.query_pairs_mut().append_pair("text", message);

        Ok(OrderHandoff::Redirect {
            url: url.to_string(),
        })
    }
}
