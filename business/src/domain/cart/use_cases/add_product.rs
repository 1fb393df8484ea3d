use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartChange;
use crate::domain::shared::value_objects::ProductId;

pub struct AddProductToCartParams {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[async_trait]
pub trait AddProductToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddProductToCartParams) -> Result<CartChange, CartError>;
}
