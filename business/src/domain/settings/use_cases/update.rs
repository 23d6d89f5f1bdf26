use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::ShopSettings;

/// Partial update: `None` leaves the stored value untouched. Optional text
/// fields use an inner `Option` so a `Some(None)` clears the value.
#[derive(Default)]
pub struct UpdateSettingsParams {
    pub shop_title: Option<String>,
    pub shop_subtitle: Option<Option<String>>,
    pub scrolling_text: Option<Option<String>>,
    pub banner_text: Option<Option<String>>,
    pub order_handle: Option<String>,
    pub welcome_message: Option<Option<String>>,
    pub welcome_photo: Option<Option<String>>,
    pub mini_app_url: Option<Option<String>>,
    pub social_links: Option<HashMap<String, String>>,
}

#[async_trait]
pub trait UpdateSettingsUseCase: Send + Sync {
    async fn execute(&self, params: UpdateSettingsParams) -> Result<ShopSettings, SettingsError>;
}
