use std::num::NonZeroU32;

use rust_decimal::Decimal;

use crate::domain::shared::translation::Translations;
use crate::domain::shared::value_objects::{LanguageCode, ProductId};

pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

/// Product data handed to the cart by an "add to cart" action.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub translations: Translations,
}

impl CartProduct {
    /// Name shown in the cart.
    ///
    /// Translated products always use their resolved translation; the plain
    /// name is only consulted when no translations exist.
    pub fn display_name(&self, language: &LanguageCode) -> String {
        let name = if self.translations.is_empty() {
            self.name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
        } else {
            self.translations.resolve_field(language, "name")
        };
        name.unwrap_or(UNNAMED_PRODUCT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: NonZeroU32,
}

impl CartLineItem {
    pub fn from_product(
        product: &CartProduct,
        language: &LanguageCode,
        quantity: NonZeroU32,
    ) -> Self {
        Self {
            id: product.id,
            name: product.display_name(language),
            price: product.price,
            image: product.image.clone().unwrap_or_default(),
            quantity,
        }
    }

    /// `None` when `price * quantity` does not fit in a [`Decimal`].
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity.get()))
    }

    /// Saturates at the `Decimal` bounds instead of overflowing.
    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity.get()))
    }
}

/// Outcome of [`Cart::set_quantity`].
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityUpdate {
    Updated {
        previous: NonZeroU32,
        current: NonZeroU32,
    },
    Removed(CartLineItem),
    NotInCart,
}

/// Derived totals the display layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    pub total_items: u64,
    pub total_price: Decimal,
    pub line_count: usize,
}

/// Line items and the totals computed from them, read together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub summary: CartSummary,
}

/// Ordered list of line items, at most one per product.
///
/// All transitions are pure; persistence and notifications live in the
/// application layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from stored items, merging repeated product ids into
    /// their first occurrence.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    /// Adds a line item or increases the quantity of the existing one.
    ///
    /// Returns the resulting quantity for that product.
    pub fn add(&mut self, item: CartLineItem) -> NonZeroU32 {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity.get());
                existing.quantity
            }
            None => {
                let quantity = item.quantity;
                self.items.push(item);
                quantity
            }
        }
    }

    pub fn remove(&mut self, id: ProductId) -> Option<CartLineItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(position))
    }

    /// Overwrites a quantity; zero or negative values remove the item.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> QuantityUpdate {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            return QuantityUpdate::NotInCart;
        };

        let clamped = quantity.clamp(0, i64::from(u32::MAX)) as u32;
        match NonZeroU32::new(clamped) {
            Some(current) => {
                let item = &mut self.items[position];
                let previous = item.quantity;
                item.quantity = current;
                QuantityUpdate::Updated { previous, current }
            }
            None => QuantityUpdate::Removed(self.items.remove(position)),
        }
    }

    /// Empties the cart, returning how many line items were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Saturates at the `Decimal` bounds instead of overflowing.
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(CartLineItem::subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self.total_items(),
            total_price: self.total_price(),
            line_count: self.items.len(),
        }
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            summary: self.summary(),
        }
    }
}
