use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::CartLineItem;

/// Persistent copy of the cart, stored as one full snapshot.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Stored line items in order; an absent cart loads as empty.
    async fn load(&self) -> Result<Vec<CartLineItem>, RepositoryError>;
    /// Overwrites the stored snapshot.
    async fn save(&self, items: &[CartLineItem]) -> Result<(), RepositoryError>;
}
