use std::collections::HashMap;

use poem_openapi::Object;

use business::domain::settings::model::ShopSettings;
use business::domain::settings::use_cases::update::UpdateSettingsParams;

#[derive(Debug, Clone, Object)]
pub struct ShopSettingsResponse {
    /// Shop title shown in the header
    pub shop_title: String,
    /// Subtitle under the title
    #[oai(skip_serializing_if_is_none)]
    pub shop_subtitle: Option<String>,
    /// Scrolling ticker text
    #[oai(skip_serializing_if_is_none)]
    pub scrolling_text: Option<String>,
    /// Banner text
    #[oai(skip_serializing_if_is_none)]
    pub banner_text: Option<String>,
    /// Telegram handle orders are sent to, without the leading @
    pub order_handle: String,
    /// Handle with the leading @, ready for display
    pub display_handle: String,
    /// Welcome message for the mini-app
    #[oai(skip_serializing_if_is_none)]
    pub welcome_message: Option<String>,
    /// Welcome photo URL
    #[oai(skip_serializing_if_is_none)]
    pub welcome_photo: Option<String>,
    /// Telegram mini-app URL
    #[oai(skip_serializing_if_is_none)]
    pub mini_app_url: Option<String>,
    /// Social network name to URL
    pub social_links: HashMap<String, String>,
}

impl From<ShopSettings> for ShopSettingsResponse {
    fn from(settings: ShopSettings) -> Self {
        let display_handle = settings.display_handle();
        Self {
            shop_title: settings.shop_title,
            shop_subtitle: settings.shop_subtitle,
            scrolling_text: settings.scrolling_text,
            banner_text: settings.banner_text,
            order_handle: settings.order_handle,
            display_handle,
            welcome_message: settings.welcome_message,
            welcome_photo: settings.welcome_photo,
            mini_app_url: settings.mini_app_url,
            social_links: settings.social_links,
        }
    }
}

/// Partial settings update. Absent fields keep their stored value; for the
/// optional text fields an empty string clears the value.
#[derive(Debug, Clone, Object)]
pub struct UpdateSettingsRequest {
    #[oai(skip_serializing_if_is_none)]
    pub shop_title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub shop_subtitle: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub scrolling_text: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub banner_text: Option<String>,
    /// With or without the leading @; stored normalized
    #[oai(skip_serializing_if_is_none)]
    pub order_handle: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub welcome_message: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub welcome_photo: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub mini_app_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub social_links: Option<HashMap<String, String>>,
}

// Empty string means "clear this field" for optional text values.
fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|s| if s.is_empty() { None } else { Some(s) })
}

impl From<UpdateSettingsRequest> for UpdateSettingsParams {
    fn from(request: UpdateSettingsRequest) -> Self {
        Self {
            shop_title: request.shop_title,
            shop_subtitle: clearable(request.shop_subtitle),
            scrolling_text: clearable(request.scrolling_text),
            banner_text: clearable(request.banner_text),
            order_handle: request.order_handle,
            welcome_message: clearable(request.welcome_message),
            welcome_photo: clearable(request.welcome_photo),
            mini_app_url: clearable(request.mini_app_url),
            social_links: request.social_links,
        }
    }
}
