#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings.order_handle_empty")]
    OrderHandleEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
