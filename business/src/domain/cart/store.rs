use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::Cart;

/// Session cart storage port. Each session owns its cart exclusively;
/// durability across restarts is not required for correctness.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Returns the session's cart, or an empty cart for an unknown session.
    async fn load(&self, session_id: &SessionId) -> Result<Cart, RepositoryError>;
    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError>;
    async fn remove(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
}
