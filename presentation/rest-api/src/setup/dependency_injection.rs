use std::sync::Arc;

use logger::TracingLogger;
use messaging::bot_api::TelegramBotGateway;
use messaging::client::TelegramClient;
use messaging::deep_link::DeepLinkGateway;
use persistence::cart::session_store::InMemoryCartStore;
use persistence::product::repository::CatalogRepositoryPostgres;
use persistence::settings::repository::SettingsRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::catalog::get_all::GetAllProductsUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::order::submit::SubmitOrderUseCaseImpl;
use business::application::settings::get::GetSettingsUseCaseImpl;
use business::application::settings::update::UpdateSettingsUseCaseImpl;
use business::domain::order::messenger::OrderGateway;

use crate::config::ordering_config::{DeliveryMode, OrderingConfig};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub settings_api: crate::api::settings::routes::SettingsApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, ordering: &OrderingConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryPostgres::new(pool.clone()));
        let settings_repository = Arc::new(SettingsRepositoryPostgres::new(pool));
        let cart_store = Arc::new(InMemoryCartStore::new(ordering.cart_ttl));

        let gateway: Arc<dyn OrderGateway> = match ordering.delivery_mode {
            DeliveryMode::BotApi => {
                let token = ordering.telegram_bot_token.clone().ok_or_else(|| {
                    anyhow::anyhow!("TELEGRAM_BOT_TOKEN is required when ORDER_DELIVERY=bot-api")
                })?;
                Arc::new(TelegramBotGateway::new(
                    TelegramClient::new(token),
                    ordering.order_chat_id.clone(),
                ))
            }
            DeliveryMode::DeepLink => Arc::new(DeepLinkGateway),
        };

        // Catalog use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            catalog: catalog_repository,
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartItemQuantityUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let submit_order_use_case = Arc::new(SubmitOrderUseCaseImpl {
            store: cart_store,
            settings: settings_repository.clone(),
            gateway,
            clear_policy: ordering.clear_policy,
            logger: logger.clone(),
        });

        // Settings use cases
        let get_settings_use_case = Arc::new(GetSettingsUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let update_settings_use_case = Arc::new(UpdateSettingsUseCaseImpl {
            repository: settings_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_products_use_case,
            get_product_by_id_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            add_item_use_case,
            get_cart_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_cart_use_case,
            submit_order_use_case,
        );

        let settings_api = crate::api::settings::routes::SettingsApi::new(
            get_settings_use_case,
            update_settings_use_case,
        );

        Ok(Self {
            health_api,
            product_api,
            cart_api,
            settings_api,
        })
    }
}
