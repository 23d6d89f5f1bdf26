#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
