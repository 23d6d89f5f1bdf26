use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing {}/{} from cart {}",
            params.product_id, params.weight, params.session_id
        ));

        let mut cart = self.store.load(&params.session_id).await?;
        cart.remove(&params.product_id, &params.weight);
        self.store.save(&params.session_id, &cart).await?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::LineItemSnapshot;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl CartStore for Store {
            async fn load(&self, session_id: &SessionId) -> Result<Cart, RepositoryError>;
            async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError>;
            async fn remove(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
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

    fn snapshot(product_id: &str) -> LineItemSnapshot {
        LineItemSnapshot {
            product_id: product_id.to_string(),
            product_name: "Abricots".to_string(),
            farm: "Ferme du Valais".to_string(),
            image: "img".to_string(),
            weight: "10g".to_string(),
            unit_price: 20.0,
            original_price: 20.0,
            discount_percent: 0.0,
        }
    }

    #[tokio::test]
    async fn should_remove_matching_line() {
        let mut stored = Cart::new();
        stored.add(snapshot("A"));
        stored.add(snapshot("B"));

        let mut store = MockStore::new();
        store.expect_load().returning(move |_| Ok(stored.clone()));
        store.expect_save().returning(|_, _| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveCartItemParams {
                session_id: SessionId::new("s-1"),
                product_id: "A".to_string(),
                weight: "10g".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product_id, "B");
    }

    #[tokio::test]
    async fn should_noop_when_line_absent() {
        let mut store = MockStore::new();
        store.expect_load().returning(|_| Ok(Cart::new()));
        store.expect_save().returning(|_, _| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveCartItemParams {
                session_id: SessionId::new("s-1"),
                product_id: "ghost".to_string(),
                weight: "5g".to_string(),
            })
            .await
            .unwrap();

        assert!(cart.is_empty());
    }
}
