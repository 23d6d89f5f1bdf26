use std::collections::HashMap;

use serde_json::Value;
use sqlx::FromRow;

use business::domain::settings::model::ShopSettings;

/// The settings table holds a single row (id = 1).
#[derive(Debug, FromRow)]
pub struct ShopSettingsEntity {
    pub shop_title: String,
    pub shop_subtitle: Option<String>,
    pub scrolling_text: Option<String>,
    pub banner_text: Option<String>,
    pub order_handle: String,
    pub welcome_message: Option<String>,
    pub welcome_photo: Option<String>,
    pub mini_app_url: Option<String>,
    pub social_links: Value,
}

impl ShopSettingsEntity {
    pub fn into_domain(self) -> ShopSettings {
        ShopSettings {
            shop_title: self.shop_title,
            shop_subtitle: self.shop_subtitle,
            scrolling_text: self.scrolling_text,
            banner_text: self.banner_text,
            order_handle: self.order_handle,
            welcome_message: self.welcome_message,
            welcome_photo: self.welcome_photo,
            mini_app_url: self.mini_app_url,
            social_links: string_map(self.social_links),
        }
    }
}

fn string_map(value: Value) -> HashMap<String, String> {
    let Value::Object(map) = value else {
        return HashMap::new();
    };

    map.into_iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k, s)),
            _ => None,
        })
        .collect()
}
