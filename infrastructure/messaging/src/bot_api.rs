use async_trait::async_trait;
use serde_json::json;

use business::domain::order::messenger::{DeliveryError, OrderGateway, OrderHandoff};

use crate::client::TelegramClient;

/// Server-side delivery: the backend pushes the order summary through the
/// Telegram Bot API. Used when the shop owner runs the companion bot.
pub struct TelegramBotGateway {
    client: TelegramClient,
    /// Destination chat. When unset, falls back to the recipient handle
    /// (works for channels/groups the bot is a member of).
    chat_id: Option<String>,
}

impl TelegramBotGateway {
    pub fn new(client: TelegramClient, chat_id: Option<String>) -> Self {
        Self { client, chat_id }
    }

    fn destination(&self, recipient: &str) -> String {
        match &self.chat_id {
            Some(chat_id) => chat_id.clone(),
            None => format!("@{recipient}"),
        }
    }
}

#[async_trait]
impl OrderGateway for TelegramBotGateway {
    async fn deliver(
        &self,
        message: &str,
        recipient: &str,
    ) -> Result<OrderHandoff, DeliveryError> {
        let body = json!({
            "chat_id": self.destination(recipient),
            "text": message,
            "parse_mode": "Markdown",
        });

        let response = self
            .client
            .client
            .post(self.client.send_message_url())
            .json(&body)
            .send()
            .await
            .map_err(|_| DeliveryError::ChannelUnavailable)?;

        if !response.status().is_success() {
            return Err(DeliveryError::Rejected);
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|_| DeliveryError::Rejected)?;
        if payload.get("ok").and_then(serde_json::Value::as_bool) != Some(true) {
            return Err(DeliveryError::Rejected);
        }

        Ok(OrderHandoff::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_configured_chat_id() {
        let gateway = TelegramBotGateway::new(
            TelegramClient::new("t".to_string()),
            Some("-100123".to_string()),
        );

        assert_eq!(gateway.destination("freshswiss"), "-100123");
    }

    #[test]
    fn should_fall_back_to_recipient_handle() {
        let gateway = TelegramBotGateway::new(TelegramClient::new("t".to_string()), None);

        assert_eq!(gateway.destination("freshswiss"), "@freshswiss");
    }
}
