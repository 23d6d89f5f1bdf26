#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.tier_unavailable")]
    TierUnavailable,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
