use std::env;
use std::time::Duration;

use business::domain::order::use_cases::submit::ClearPolicy;

/// How submitted orders are handed off to Telegram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Build a t.me deep link and let the client open it.
    DeepLink,
    /// Push the order straight to a chat through the Bot API.
    BotApi,
}

/// Order hand-off and cart session configuration.
#[derive(Debug, Clone)]
pub struct OrderingConfig {
    pub delivery_mode: DeliveryMode,
    pub telegram_bot_token: Option<String>,
    pub order_chat_id: Option<String>,
    pub clear_policy: ClearPolicy,
    pub cart_ttl: Duration,
}

impl OrderingConfig {
    /// Load ordering configuration from environment variables
    ///
    /// Environment variables:
    /// - ORDER_DELIVERY: "deep-link" (default) or "bot-api"
    /// - TELEGRAM_BOT_TOKEN: Bot API token (required for "bot-api")
    /// - ORDER_CHAT_ID: Target chat for Bot API delivery (falls back to the
    ///   shop's order handle when unset)
    /// - ORDER_CLEAR_POLICY: "after-send" (default) or "on-delivered"
    /// - CART_TTL_SECS: Idle seconds before a session cart is evicted
    ///   (default: 86400)
    pub fn from_env() -> Self {
        let delivery_mode = match env::var("ORDER_DELIVERY").as_deref() {
            Ok("bot-api") => DeliveryMode::BotApi,
            _ => DeliveryMode::DeepLink,
        };

        let clear_policy = match env::var("ORDER_CLEAR_POLICY").as_deref() {
            Ok("on-delivered") => ClearPolicy::OnDelivered,
            _ => ClearPolicy::AfterSend,
        };

        let cart_ttl_secs = env::var("CART_TTL_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(86_400);

        Self {
            delivery_mode,
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            order_chat_id: env::var("ORDER_CHAT_ID").ok(),
            clear_policy,
            cart_ttl: Duration::from_secs(cart_ttl_secs),
        }
    }
}
