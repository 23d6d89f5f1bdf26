use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::settings::model::ShopSettings;
use business::domain::settings::repository::SettingsRepository;

use super::entity::ShopSettingsEntity;

pub struct SettingsRepositoryPostgres {
    pool: PgPool,
}

impl SettingsRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn get(&self) -> Result<Option<ShopSettings>, RepositoryError> {
        let entity = sqlx::query_as::<_, ShopSettingsEntity>(
            "SELECT shop_title, shop_subtitle, scrolling_text, banner_text, order_handle, welcome_message, welcome_photo, mini_app_url, social_links FROM shop_settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, settings: &ShopSettings) -> Result<(), RepositoryError> {
        let social_links = serde_json::to_value(&settings.social_links)
            .map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO shop_settings (id, shop_title, shop_subtitle, scrolling_text, banner_text, order_handle, welcome_message, welcome_photo, mini_app_url, social_links, updated_at)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
            ON CONFLICT (id) DO UPDATE SET
                shop_title = EXCLUDED.shop_title,
                shop_subtitle = EXCLUDED.shop_subtitle,
                scrolling_text = EXCLUDED.scrolling_text,
                banner_text = EXCLUDED.banner_text,
                order_handle = EXCLUDED.order_handle,
                welcome_message = EXCLUDED.welcome_message,
                welcome_photo = EXCLUDED.welcome_photo,
                mini_app_url = EXCLUDED.mini_app_url,
                social_links = EXCLUDED.social_links,
                updated_at = NOW()"#,
        )
        .bind(&settings.shop_title)
        .bind(&settings.shop_subtitle)
        .bind(&settings.scrolling_text)
        .bind(&settings.banner_text)
        .bind(&settings.order_handle)
        .bind(&settings.welcome_message)
        .bind(&settings.welcome_photo)
        .bind(&settings.mini_app_url)
        .bind(social_links)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
