use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::product_card::ProductCardBuilder;
use crate::domain::catalog::errors::FetchError;
use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::catalog::storefront::ProductCard;
use crate::domain::catalog::use_cases::get_product_card::{
    GetProductCardParams, GetProductCardUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::LanguageCode;

pub struct GetProductCardUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
    pub language: LanguageCode,
}

#[async_trait]
impl GetProductCardUseCase for GetProductCardUseCaseImpl {
    async fn execute(&self, params: GetProductCardParams) -> Result<ProductCard, FetchError> {
        let language = params.language.unwrap_or_else(|| self.language.clone());

        let product = self.gateway.get_product(params.id).await.map_err(|err| {
            self.logger
                .error(&format!("Could not fetch product {}: {}", params.id, err));
            err
        })?;

        let mut builder =
            ProductCardBuilder::new(self.gateway.as_ref(), self.logger.as_ref(), &language);
        Ok(builder.build(&product).await)
    }
}
