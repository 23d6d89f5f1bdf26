use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ShopSettings;

/// Settings storage port. The shop has a single settings document.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Returns the stored settings, or `None` when nothing was saved yet.
    async fn get(&self) -> Result<Option<ShopSettings>, RepositoryError>;
    async fn save(&self, settings: &ShopSettings) -> Result<(), RepositoryError>;
}
