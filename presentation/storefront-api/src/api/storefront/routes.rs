use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::use_cases::get_product_card::{
    GetProductCardParams, GetProductCardUseCase,
};
use business::domain::catalog::use_cases::load_storefront::{
    LoadStorefrontParams, LoadStorefrontUseCase,
};
use business::domain::shared::value_objects::{CategoryId, LanguageCode, ProductId};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::storefront::dto::{ProductCardResponse, StorefrontResponse};
use crate::api::tags::ApiTags;

pub struct StorefrontApi {
    load_use_case: Arc<dyn LoadStorefrontUseCase>,
    product_card_use_case: Arc<dyn GetProductCardUseCase>,
}

impl StorefrontApi {
    pub fn new(
        load_use_case: Arc<dyn LoadStorefrontUseCase>,
        product_card_use_case: Arc<dyn GetProductCardUseCase>,
    ) -> Self {
        Self {
            load_use_case,
            product_card_use_case,
        }
    }
}

fn language(lang: Option<String>) -> Option<LanguageCode> {
    lang.filter(|code| !code.trim().is_empty())
        .map(LanguageCode::from)
}

#[OpenApi]
impl StorefrontApi {
    /// Load the storefront page
    ///
    /// Returns company details, product cards, category menu entries,
    /// partners and certificates. Sections whose data cannot be fetched
    /// fall back to empty values; the product listing reports
    /// "unavailable" with the failure message.
    #[oai(path = "/storefront", method = "get", tag = "ApiTags::Storefront")]
    async fn load(
        &self,
        category: Query<Option<u64>>,
        lang: Query<Option<String>>,
    ) -> Json<StorefrontResponse> {
        let params = LoadStorefrontParams {
            category: category.0.map(CategoryId::new),
            language: language(lang.0),
        };

        Json(self.load_use_case.execute(params).await.into())
    }

    /// Get a product card
    ///
    /// Resolves one product's display data with the same fallbacks as the
    /// storefront listing.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Storefront")]
    async fn product_card(
        &self,
        id: Path<u64>,
        lang: Query<Option<String>>,
    ) -> GetProductCardResponse {
        let params = GetProductCardParams {
            id: ProductId::new(id.0),
            language: language(lang.0),
        };

        match self.product_card_use_case.execute(params).await {
            Ok(card) => GetProductCardResponse::Ok(Json(card.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductCardResponse::NotFound(json),
                    _ => GetProductCardResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductCardResponse {
    #[oai(status = 200)]
    Ok(Json<ProductCardResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
