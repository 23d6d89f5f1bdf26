use async_trait::async_trait;

use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::ShopSettings;

#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    /// Returns stored settings, falling back to defaults when none exist.
    async fn execute(&self) -> Result<ShopSettings, SettingsError>;
}
