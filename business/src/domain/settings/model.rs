use std::collections::HashMap;

use super::errors::SettingsError;

/// Storefront configuration: header texts, the Telegram handle orders are
/// sent to, and the welcome content served by the companion bot.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopSettings {
    pub shop_title: String,
    pub shop_subtitle: Option<String>,
    pub scrolling_text: Option<String>,
    pub banner_text: Option<String>,
    /// Telegram username receiving orders, stored without the leading '@'.
    pub order_handle: String,
    pub welcome_message: Option<String>,
    pub welcome_photo: Option<String>,
    pub mini_app_url: Option<String>,
    pub social_links: HashMap<String, String>,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            shop_title: "FreshSwiss".to_string(),
            shop_subtitle: None,
            scrolling_text: None,
            banner_text: None,
            order_handle: "FreshSwiss".to_string(),
            welcome_message: None,
            welcome_photo: None,
            mini_app_url: None,
            social_links: HashMap::new(),
        }
    }
}

impl ShopSettings {
    /// The handle as shown in the submission UI ("@username").
    pub fn display_handle(&self) -> String {
        format!("@{}", self.order_handle)
    }

    /// Normalizes a user-entered handle: trims whitespace and a leading '@'.
    /// An empty result is rejected, orders would have no destination.
    pub fn normalize_handle(raw: &str) -> Result<String, SettingsError> {
        let handle = raw.trim().trim_start_matches('@').to_string();
        if handle.is_empty() {
            return Err(SettingsError::OrderHandleEmpty);
        }
        Ok(handle)
    }
}
