use async_trait::async_trait;

/// What the gateway did with the order message.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderHandoff {
    /// Delivered server-side (e.g. through a bot API).
    Sent,
    /// Nothing was delivered yet: the client must follow this URL to hand
    /// the pre-filled message to the chat application itself.
    Redirect { url: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery.channel_unavailable")]
    ChannelUnavailable,
    #[error("delivery.rejected")]
    Rejected,
}

/// Messaging port. Takes a formatted order summary and a destination handle;
/// delivery mechanics (deep link vs. server-side send) live in the adapter.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn deliver(&self, message: &str, recipient: &str)
    -> Result<OrderHandoff, DeliveryError>;
}
