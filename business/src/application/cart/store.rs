use std::num::NonZeroU32;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::{CartChange, CartEvent, CartObserver, Durability};
use crate::domain::cart::model::{
    Cart, CartLineItem, CartProduct, CartSnapshot, CartSummary, QuantityUpdate,
};
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{LanguageCode, ProductId};

/// Authoritative in-memory cart kept in sync with its persisted snapshot.
///
/// Mutations are serialised: each one is applied, written back through the
/// repository and then announced to observers before the next one starts.
/// Storage failures never reach callers as errors; they are logged and
/// reported through [`Durability`] on the returned change.
pub struct CartStore {
    repository: Arc<dyn CartRepository>,
    logger: Arc<dyn Logger>,
    language: LanguageCode,
    observers: Vec<Arc<dyn CartObserver>>,
    cart: Mutex<Cart>,
}

impl CartStore {
    /// Loads the persisted cart; unreadable data starts an empty cart.
    pub async fn load(
        repository: Arc<dyn CartRepository>,
        logger: Arc<dyn Logger>,
        language: LanguageCode,
    ) -> Self {
        let cart = match repository.load().await {
            Ok(items) => {
                logger.info(&format!("Cart loaded with {} line items", items.len()));
                Cart::from_items(items)
            }
            Err(err) => {
                logger.error(&format!("Error loading cart, starting empty: {}", err));
                Cart::new()
            }
        };

        Self {
            repository,
            logger,
            language,
            observers: Vec::new(),
            cart: Mutex::new(cart),
        }
    }

    pub fn subscribe(mut self, observer: Arc<dyn CartObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub async fn add(&self, product: &CartProduct, quantity: u32) -> Result<CartChange, CartError> {
        let Some(added) = NonZeroU32::new(quantity) else {
            self.logger.warn(&format!(
                "Rejected adding product {} with zero quantity",
                product.id
            ));
            return Err(CartError::InvalidQuantity);
        };

        let mut cart = self.cart.lock().await;
        let item = CartLineItem::from_product(product, &self.language, added);
        let name = item.name.clone();
        let total = cart.add(item);

        self.logger.info(&format!(
            "Added {} x product {} to cart (now {})",
            added, product.id, total
        ));

        let event = CartEvent::ItemAdded {
            id: product.id,
            name,
            added,
            quantity: total,
        };
        Ok(self.commit(&cart, event).await)
    }

    /// Removes a product; `None` when it was not in the cart.
    pub async fn remove(&self, id: ProductId) -> Option<CartChange> {
        let mut cart = self.cart.lock().await;
        if cart.remove(id).is_none() {
            self.logger
                .debug(&format!("Product {} not in cart, nothing to remove", id));
            return None;
        }

        self.logger.info(&format!("Removed product {} from cart", id));
        Some(self.commit(&cart, CartEvent::ItemRemoved { id }).await)
    }

    /// Sets a quantity; zero or negative removes. `None` when absent.
    pub async fn set_quantity(&self, id: ProductId, quantity: i64) -> Option<CartChange> {
        let mut cart = self.cart.lock().await;
        let event = match cart.set_quantity(id, quantity) {
            QuantityUpdate::Updated { previous, current } => CartEvent::QuantityChanged {
                id,
                previous,
                current,
            },
            QuantityUpdate::Removed(_) => CartEvent::ItemRemoved { id },
            QuantityUpdate::NotInCart => {
                self.logger.debug(&format!(
                    "Product {} not in cart, quantity left unchanged",
                    id
                ));
                return None;
            }
        };

        self.logger
            .info(&format!("Set quantity of product {} to {}", id, quantity));
        Some(self.commit(&cart, event).await)
    }

    pub async fn clear(&self) -> CartChange {
        let mut cart = self.cart.lock().await;
        let removed_lines = cart.clear();

        self.logger
            .info(&format!("Cleared cart ({} line items)", removed_lines));
        self.commit(&cart, CartEvent::Cleared { removed_lines })
            .await
    }

    pub async fn total_items(&self) -> u64 {
        self.cart.lock().await.total_items()
    }

    pub async fn total_price(&self) -> Decimal {
        self.cart.lock().await.total_price()
    }

    pub async fn contains(&self, id: ProductId) -> bool {
        self.cart.lock().await.contains(id)
    }

    pub async fn items(&self) -> Vec<CartLineItem> {
        self.cart.lock().await.items().to_vec()
    }

    pub async fn summary(&self) -> CartSummary {
        self.cart.lock().await.summary()
    }

    /// Items and totals taken under one lock, so they always agree.
    pub async fn snapshot(&self) -> CartSnapshot {
        self.cart.lock().await.snapshot()
    }

    async fn commit(&self, cart: &Cart, event: CartEvent) -> CartChange {
        let durability = match self.repository.save(cart.items()).await {
            Ok(()) => Durability::Persisted,
            Err(err) => {
                self.logger
                    .error(&format!("Error saving cart, kept in memory only: {}", err));
                Durability::Failed {
                    reason: err.to_string(),
                }
            }
        };

        let change = CartChange {
            event,
            summary: cart.summary(),
            durability,
        };
        for observer in &self.observers {
            observer.on_cart_changed(&change);
        }
        change
    }
}
