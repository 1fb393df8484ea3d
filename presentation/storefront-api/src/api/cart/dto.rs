use poem_openapi::Object;

use business::domain::cart::events::{CartChange, CartEvent, Durability};
use business::domain::cart::model::{CartLineItem, CartSummary};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    pub product_id: u64,
    /// Defaults to 1; zero is rejected
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct SetQuantityRequest {
    /// Zero or negative removes the item
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub id: u64,
    pub name: String,
    /// Decimal price as a string, e.g. "9.99"
    pub price: String,
    pub image: String,
    pub quantity: u32,
    pub subtotal: String,
}

impl From<CartLineItem> for CartItemResponse {
    fn from(item: CartLineItem) -> Self {
        Self {
            id: item.id.value(),
            subtotal: item.subtotal().to_string(),
            name: item.name,
            price: item.price.to_string(),
            image: item.image,
            quantity: item.quantity.get(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub total_items: u64,
    pub total_price: String,
    pub line_count: u64,
    /// Badge text, e.g. "[3]"
    pub badge: String,
}

impl CartResponse {
    pub fn new(items: Vec<CartLineItem>, summary: CartSummary, badge: String) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            total_items: summary.total_items,
            total_price: summary.total_price.to_string(),
            line_count: summary.line_count as u64,
            badge,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartMutationResponse {
    /// False when the request did not change the cart
    pub changed: bool,
    /// Kind of change: "item_added", "item_removed", "quantity_changed",
    /// "cleared" or "none"
    pub event: String,
    /// Whether the new cart was written to storage
    pub persisted: bool,
    #[oai(skip_serializing_if_is_none)]
    pub durability_error: Option<String>,
    pub cart: CartResponse,
}

impl CartMutationResponse {
    pub fn from_change(change: Option<CartChange>, cart: CartResponse) -> Self {
        let Some(change) = change else {
            return Self {
                changed: false,
                event: "none".to_string(),
                persisted: true,
                durability_error: None,
                cart,
            };
        };

        let event = match change.event {
            CartEvent::ItemAdded { .. } => "item_added",
            CartEvent::ItemRemoved { .. } => "item_removed",
            CartEvent::QuantityChanged { .. } => "quantity_changed",
            CartEvent::Cleared { .. } => "cleared",
        };
        let durability_error = match change.durability {
            Durability::Persisted => None,
            Durability::Failed { reason } => Some(reason),
        };

        Self {
            changed: true,
            event: event.to_string(),
            persisted: durability_error.is_none(),
            durability_error,
            cart,
        }
    }
}
