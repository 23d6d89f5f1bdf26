use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of {}/{} to {} in cart {}",
            params.product_id, params.weight, params.quantity, params.session_id
        ));

        let mut cart = self.store.load(&params.session_id).await?;
        cart.update_quantity(&params.product_id, &params.weight, params.quantity);
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

    fn cart_with_one_line() -> Cart {
        let mut cart = Cart::new();
        cart.add(LineItemSnapshot {
            product_id: "A".to_string(),
            product_name: "Framboises".to_string(),
            farm: "Ferme du Lac".to_string(),
            image: "img".to_string(),
            weight: "5g".to_string(),
            unit_price: 9.5,
            original_price: 9.5,
            discount_percent: 0.0,
        });
        cart
    }

    fn store_with(cart: Cart) -> MockStore {
        let mut store = MockStore::new();
        store.expect_load().returning(move |_| Ok(cart.clone()));
        store.expect_save().returning(|_, _| Ok(()));
        store
    }

    fn params(quantity: i64) -> UpdateCartItemQuantityParams {
        UpdateCartItemQuantityParams {
            session_id: SessionId::new("s-1"),
            product_id: "A".to_string(),
            weight: "5g".to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_store_new_quantity() {
        let use_case = UpdateCartItemQuantityUseCaseImpl {
            store: Arc::new(store_with(cart_with_one_line())),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(5)).await.unwrap();

        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[tokio::test]
    async fn should_drop_line_when_quantity_reaches_zero() {
        let use_case = UpdateCartItemQuantityUseCaseImpl {
            store: Arc::new(store_with(cart_with_one_line())),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(0)).await.unwrap();

        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_noop_for_unknown_line() {
        let use_case = UpdateCartItemQuantityUseCaseImpl {
            store: Arc::new(store_with(cart_with_one_line())),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(UpdateCartItemQuantityParams {
                session_id: SessionId::new("s-1"),
                product_id: "unknown".to_string(),
                weight: "5g".to_string(),
                quantity: 3,
            })
            .await
            .unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }
}
