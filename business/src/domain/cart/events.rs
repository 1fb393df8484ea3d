use std::num::NonZeroU32;

use crate::domain::shared::value_objects::ProductId;

use super::model::CartSummary;

/// What a cart mutation did.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ItemAdded {
        id: ProductId,
        name: String,
        added: NonZeroU32,
        quantity: NonZeroU32,
    },
    ItemRemoved {
        id: ProductId,
    },
    QuantityChanged {
        id: ProductId,
        previous: NonZeroU32,
        current: NonZeroU32,
    },
    Cleared {
        removed_lines: usize,
    },
}

/// Whether the snapshot write that followed a mutation succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum Durability {
    Persisted,
    Failed { reason: String },
}

impl Durability {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Durability::Persisted)
    }
}

/// Record of one applied mutation, handed to callers and observers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartChange {
    pub event: CartEvent,
    pub summary: CartSummary,
    pub durability: Durability,
}

/// Subscriber notified after each cart mutation has been persisted.
pub trait CartObserver: Send + Sync {
    fn on_cart_changed(&self, change: &CartChange);
}
