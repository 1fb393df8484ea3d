use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartLineItem;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

/// Stored shape of one cart line: `{id, name, price, image, quantity}`.
///
/// Prices are written as decimal strings and accepted as strings or numbers.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartLineItemEntity {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: i64,
}

impl CartLineItemEntity {
    pub fn from_domain(item: &CartLineItem) -> Self {
        Self {
            id: item.id.value(),
            name: Some(item.name.clone()),
            price: item.price,
            image: Some(item.image.clone()),
            quantity: i64::from(item.quantity.get()),
        }
    }

    /// Fails with [`RepositoryError::Corrupted`] for non-positive or
    /// out-of-range quantities, and when `price * quantity` overflows.
    pub fn into_domain(self) -> Result<CartLineItem, RepositoryError> {
        let quantity = u32::try_from(self.quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(RepositoryError::Corrupted)?;

        let item = CartLineItem {
            id: ProductId::new(self.id),
            name: self.name.unwrap_or_default(),
            price: self.price,
            image: self.image.unwrap_or_default(),
            quantity,
        };
        item.checked_subtotal().ok_or(RepositoryError::Corrupted)?;
        Ok(item)
    }
}
