use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use business::domain::cart::events::{CartChange, CartEvent, CartObserver};

pub const ADDED_TO_CART_MESSAGE: &str = "Product added to cart!";
pub const TOAST_LIFETIME: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub remaining: Duration,
}

struct Entry {
    id: u64,
    message: String,
    expires_at: Instant,
}

/// Transient notifications raised by cart additions.
///
/// Toasts dismiss themselves once their lifetime has elapsed; expired
/// entries are dropped on the next read or write.
pub struct ToastNotifier {
    lifetime: Duration,
    next_id: AtomicU64,
    entries: Mutex<Vec<Entry>>,
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new(TOAST_LIFETIME)
    }
}

impl ToastNotifier {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            next_id: AtomicU64::new(1),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn show(&self, message: impl Into<String>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|entry| entry.expires_at > now);
        entries.push(Entry {
            id,
            message: message.into(),
            expires_at: now + self.lifetime,
        });
        id
    }

    /// Toasts that have not dismissed yet, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|entry| entry.expires_at > now);
        entries
            .iter()
            .map(|entry| Toast {
                id: entry.id,
                message: entry.message.clone(),
                remaining: entry.expires_at - now,
            })
            .collect()
    }
}

impl CartObserver for ToastNotifier {
    fn on_cart_changed(&self, change: &CartChange) {
        if let CartEvent::ItemAdded { .. } = change.event {
            self.show(ADDED_TO_CART_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::events::Durability;
    use business::domain::cart::model::CartSummary;
    use business::domain::shared::value_objects::ProductId;
    use std::num::NonZeroU32;

    fn change(event: CartEvent) -> CartChange {
        CartChange {
            event,
            summary: CartSummary::default(),
            durability: Durability::Persisted,
        }
    }

    fn added() -> CartEvent {
        let one = NonZeroU32::new(1).unwrap();
        CartEvent::ItemAdded {
            id: ProductId::new(1),
            name: "Widget".to_string(),
            added: one,
            quantity: one,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn should_show_toast_on_add_and_dismiss_after_two_seconds() {
        let notifier = ToastNotifier::default();

        notifier.on_cart_changed(&change(added()));

        let active = notifier.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, ADDED_TO_CART_MESSAGE);

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert_eq!(notifier.active().len(), 1);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(notifier.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_ignore_non_add_events() {
        let notifier = ToastNotifier::default();

        notifier.on_cart_changed(&change(CartEvent::ItemRemoved {
            id: ProductId::new(1),
        }));
        notifier.on_cart_changed(&change(CartEvent::Cleared { removed_lines: 3 }));

        assert!(notifier.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_expire_toasts_independently() {
        let notifier = ToastNotifier::default();

        let first = notifier.show("first");
        tokio::time::advance(Duration::from_secs(1)).await;
        let second = notifier.show("second");
        tokio::time::advance(Duration::from_secs(1)).await;

        let active = notifier.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second);
        assert_ne!(first, second);
        assert_eq!(active[0].remaining, Duration::from_secs(1));
    }
}
