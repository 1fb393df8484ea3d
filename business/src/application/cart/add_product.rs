use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::application::catalog::product_card::main_image_url;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartChange;
use crate::domain::cart::model::CartProduct;
use crate::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::logger::Logger;

pub struct AddProductToCartUseCaseImpl {
    pub store: Arc<CartStore>,
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<CartChange, CartError> {
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Adding product {} (x{}) to cart",
            params.product_id, params.quantity
        ));

        let product = self
            .gateway
            .get_product(params.product_id)
            .await
            .map_err(|err| {
                self.logger.error(&format!(
                    "Could not fetch product {}: {}",
                    params.product_id, err
                ));
                CartError::ProductUnavailable(err.to_string())
            })?;

        let image = main_image_url(self.gateway.as_ref(), self.logger.as_ref(), &product).await;

        let cart_product = CartProduct {
            id: product.id,
            name: None,
            price: product.price,
            image: Some(image),
            translations: product.translations,
        };

        self.store.add(&cart_product, params.quantity).await
    }
}
