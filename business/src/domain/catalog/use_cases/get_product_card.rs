use async_trait::async_trait;

use crate::domain::catalog::errors::FetchError;
use crate::domain::catalog::storefront::ProductCard;
use crate::domain::shared::value_objects::{LanguageCode, ProductId};

pub struct GetProductCardParams {
    pub id: ProductId,
    pub language: Option<LanguageCode>,
}

#[async_trait]
pub trait GetProductCardUseCase: Send + Sync {
    async fn execute(&self, params: GetProductCardParams) -> Result<ProductCard, FetchError>;
}
