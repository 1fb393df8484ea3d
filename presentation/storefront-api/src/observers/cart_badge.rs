use std::sync::atomic::{AtomicU64, Ordering};

use business::domain::cart::events::{CartChange, CartObserver};

/// Item count shown next to the cart link.
#[derive(Default)]
pub struct CartBadge {
    count: AtomicU64,
}

impl CartBadge {
    pub fn new(initial: u64) -> Self {
        Self {
            count: AtomicU64::new(initial),
        }
    }

    pub fn set(&self, count: u64) {
        self.count.store(count, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Rendered as `[n]`.
    pub fn label(&self) -> String {
        format!("[{}]", self.count())
    }
}

impl CartObserver for CartBadge {
    fn on_cart_changed(&self, change: &CartChange) {
        self.set(change.summary.total_items);
    }
}
