use reqwest::Client;

/// Shared Telegram Bot API HTTP client configuration.
pub struct TelegramClient {
    pub client: Client,
    pub token: String,
    pub base_url: String,
}

impl TelegramClient {
    pub fn new(token: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            token,
            base_url: "https://api.telegram.org".to_string(),
        }
    }

    /// Returns the sendMessage endpoint URL.
    pub fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.token)
    }
}
