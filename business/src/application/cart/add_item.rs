use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineItemSnapshot};
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::catalog::pricing;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding {} of product {} to cart {}",
            params.weight, params.product_id, params.session_id
        ));

        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await?
            .ok_or(CartError::ProductNotFound)?;

        // An unpriced tier never reaches the cart: resolve first, reject early.
        let resolved = pricing::resolve_price(&product.prices, &product.promotions, &params.weight)
            .ok_or(CartError::TierUnavailable)?;

        let mut cart = self.store.load(&params.session_id).await?;
        cart.add(LineItemSnapshot {
            product_id: product.id,
            product_name: product.name,
            farm: product.farm,
            image: product.image,
            weight: params.weight,
            unit_price: resolved.final_price,
            original_price: resolved.original_price,
            discount_percent: resolved.discount_percent,
        });
        self.store.save(&params.session_id, &cart).await?;

        self.logger.info(&format!(
            "Cart {} now holds {} items",
            params.session_id,
            cart.total_items()
        ));
        Ok(cart)
    }
}
