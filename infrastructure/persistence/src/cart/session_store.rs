use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::cart::model::Cart;
use business::domain::cart::store::CartStore;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

struct Entry {
    cart: Cart,
    touched_at: Instant,
}

/// In-memory session cart store with a per-session idle TTL.
///
/// Sessions idle longer than the TTL are evicted on the next access, so the
/// map stays bounded by the number of recently active sessions. Carts are
/// ephemeral by contract; losing them on restart is acceptable.
pub struct InMemoryCartStore {
    ttl: Duration,
    sessions: RwLock<HashMap<SessionId, Entry>>,
}

impl InMemoryCartStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn sweep(&self, sessions: &mut HashMap<SessionId, Entry>) {
        sessions.retain(|_, entry| entry.touched_at.elapsed() <= self.ttl);
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn load(&self, session_id: &SessionId) -> Result<Cart, RepositoryError> {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions);

        match sessions.get_mut(session_id) {
            Some(entry) => {
                entry.touched_at = Instant::now();
                Ok(entry.cart.clone())
            }
            None => Ok(Cart::new()),
        }
    }

    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions);

        sessions.insert(
            session_id.clone(),
            Entry {
                cart: cart.clone(),
                touched_at: Instant::now(),
            },
        );
        Ok(())
    }

    async fn remove(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id);
        self.sweep(&mut sessions);
        Ok(())
    }
}
