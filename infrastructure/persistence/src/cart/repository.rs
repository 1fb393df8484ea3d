use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use business::domain::cart::model::CartLineItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::kv::KeyValueStore;

use super::entity::CartLineItemEntity;

pub const CART_STORAGE_KEY: &str = "storefront_cart";

/// Keeps the whole cart as one JSON array under a single key.
pub struct CartRepositoryKeyValue {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartRepositoryKeyValue {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: CART_STORAGE_KEY.to_string(),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryKeyValue {
    async fn load(&self) -> Result<Vec<CartLineItem>, RepositoryError> {
        let raw = self.store.get(&self.key).await.map_err(|err| {
            error!("Failed to read cart from storage: {}", err);
            RepositoryError::Read
        })?;
        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        let entities: Vec<CartLineItemEntity> = serde_json::from_str(&raw).map_err(|err| {
            error!("Stored cart is not valid JSON: {}", err);
            RepositoryError::Corrupted
        })?;

        entities
            .into_iter()
            .map(CartLineItemEntity::into_domain)
            .collect()
    }

    async fn save(&self, items: &[CartLineItem]) -> Result<(), RepositoryError> {
        let entities: Vec<CartLineItemEntity> =
            items.iter().map(CartLineItemEntity::from_domain).collect();
        let payload = serde_json::to_string(&entities).map_err(|err| {
            error!("Failed to serialize cart: {}", err);
            RepositoryError::Write
        })?;

        self.store.set(&self.key, &payload).await.map_err(|err| {
            error!("Failed to write cart to storage: {}", err);
            RepositoryError::Write
        })
    }
}
