use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::ShopSettings;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::get::GetSettingsUseCase;

pub struct GetSettingsUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSettingsUseCase for GetSettingsUseCaseImpl {
    async fn execute(&self) -> Result<ShopSettings, SettingsError> {
        self.logger.debug("Loading shop settings");
        let settings = self.repository.get().await?.unwrap_or_default();
        Ok(settings)
    }
}
