use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::ShopSettings;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::update::{UpdateSettingsParams, UpdateSettingsUseCase};

pub struct UpdateSettingsUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateSettingsUseCase for UpdateSettingsUseCaseImpl {
    async fn execute(&self, params: UpdateSettingsParams) -> Result<ShopSettings, SettingsError> {
        self.logger.info("Updating shop settings");

        let mut settings = self.repository.get().await?.unwrap_or_default();

        if let Some(title) = params.shop_title {
            settings.shop_title = title;
        }
        if let Some(subtitle) = params.shop_subtitle {
            settings.shop_subtitle = subtitle;
        }
        if let Some(scrolling) = params.scrolling_text {
            settings.scrolling_text = scrolling;
        }
        if let Some(banner) = params.banner_text {
            settings.banner_text = banner;
        }
        if let Some(handle) = params.order_handle {
            settings.order_handle = ShopSettings::normalize_handle(&handle)?;
        }
        if let Some(welcome) = params.welcome_message {
            settings.welcome_message = welcome;
        }
        if let Some(photo) = params.welcome_photo {
            settings.welcome_photo = photo;
        }
        if let Some(url) = params.mini_app_url {
            settings.mini_app_url = url;
        }
        if let Some(links) = params.social_links {
            settings.social_links = links;
        }

        self.repository.save(&settings).await?;

        self.logger.info("Shop settings saved");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub SettingsRepo {}

        #[async_trait]
        impl SettingsRepository for SettingsRepo {
            async fn get(&self) -> Result<Option<ShopSettings>, RepositoryError>;
            async fn save(&self, settings: &ShopSettings) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn repo_with_defaults() -> MockSettingsRepo {
        let mut repo = MockSettingsRepo::new();
        repo.expect_get().returning(|| Ok(None));
        repo.expect_save().returning(|_| Ok(()));
        repo
    }

    #[tokio::test]
    async fn should_patch_only_provided_fields() {
        let use_case = UpdateSettingsUseCaseImpl {
            repository: Arc::new(repo_with_defaults()),
            logger: mock_logger(),
        };

        let settings = use_case
            .execute(UpdateSettingsParams {
                banner_text: Some(Some("Livraison offerte dès 100€".to_string())),
                ..UpdateSettingsParams::default()
            })
            .await
            .unwrap();

        assert_eq!(
            settings.banner_text.as_deref(),
            Some("Livraison offerte dès 100€")
        );
        // Untouched fields keep their previous values.
        assert_eq!(settings.shop_title, "FreshSwiss");
    }

    #[tokio::test]
    async fn should_normalize_order_handle() {
        let use_case = UpdateSettingsUseCaseImpl {
            repository: Arc::new(repo_with_defaults()),
            logger: mock_logger(),
        };

        let settings = use_case
            .execute(UpdateSettingsParams {
                order_handle: Some("@alpinegreens".to_string()),
                ..UpdateSettingsParams::default()
            })
            .await
            .unwrap();

        assert_eq!(settings.order_handle, "alpinegreens");
    }

    #[tokio::test]
    async fn should_reject_empty_order_handle() {
        let mut repo = MockSettingsRepo::new();
        repo.expect_get().returning(|| Ok(None));
        // No save expectation: a rejected handle must not be persisted.

        let use_case = UpdateSettingsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateSettingsParams {
                order_handle: Some("@".to_string()),
                ..UpdateSettingsParams::default()
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            SettingsError::OrderHandleEmpty
        ));
    }

    #[tokio::test]
    async fn should_clear_optional_field_with_explicit_none() {
        let mut repo = MockSettingsRepo::new();
        repo.expect_get().returning(|| {
            Ok(Some(ShopSettings {
                scrolling_text: Some("Promo du jour".to_string()),
                ..ShopSettings::default()
            }))
        });
        repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateSettingsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let settings = use_case
            .execute(UpdateSettingsParams {
                scrolling_text: Some(None),
                ..UpdateSettingsParams::default()
            })
            .await
            .unwrap();

        assert!(settings.scrolling_text.is_none());
    }
}
