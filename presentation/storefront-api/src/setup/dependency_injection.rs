use std::sync::Arc;

use api_client::ApiClient;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryKeyValue;
use persistence::kv::FileKeyValueStore;

use business::application::cart::add_product::AddProductToCartUseCaseImpl;
use business::application::cart::store::CartStore;
use business::application::catalog::get_product_card::GetProductCardUseCaseImpl;
use business::application::catalog::load_storefront::LoadStorefrontUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::notifications::routes::NotificationsApi;
use crate::api::storefront::routes::StorefrontApi;
use crate::config::app_config::AppConfig;
use crate::observers::cart_badge::CartBadge;
use crate::observers::toast::ToastNotifier;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub storefront_api: StorefrontApi,
    pub cart_api: CartApi,
    pub notifications_api: NotificationsApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let language = config.storefront.language.clone();

        // Infrastructure adapters
        let gateway = Arc::new(ApiClient::new(
            config.api.base_url.clone(),
            config.api.media_url.clone(),
            config.api.timeout,
        ));
        let cart_repository = Arc::new(CartRepositoryKeyValue::new(Arc::new(
            FileKeyValueStore::new(config.storage.dir.clone()),
        )));

        // Cart store and its observers
        let badge = Arc::new(CartBadge::default());
        let toasts = Arc::new(ToastNotifier::default());
        let store = Arc::new(
            CartStore::load(cart_repository, logger.clone(), language.clone())
                .await
                .subscribe(badge.clone())
                .subscribe(toasts.clone()),
        );
        badge.set(store.total_items().await);

        // Use cases
        let load_storefront_use_case = Arc::new(LoadStorefrontUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
            language: language.clone(),
        });
        let product_card_use_case = Arc::new(GetProductCardUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
            language,
        });
        let add_product_use_case = Arc::new(AddProductToCartUseCaseImpl {
            store: store.clone(),
            gateway,
            logger,
        });

        Ok(Self {
            health_api: HealthApi::new(),
            storefront_api: StorefrontApi::new(load_storefront_use_case, product_card_use_case),
            cart_api: CartApi::new(store, add_product_use_case, badge),
            notifications_api: NotificationsApi::new(toasts),
        })
    }
}
