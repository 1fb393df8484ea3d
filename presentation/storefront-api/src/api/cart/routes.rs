use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::application::cart::store::CartStore;
use business::domain::cart::events::CartChange;
use business::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{
    AddCartItemRequest, CartMutationResponse, CartResponse, SetQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::observers::cart_badge::CartBadge;

pub struct CartApi {
    store: Arc<CartStore>,
    add_use_case: Arc<dyn AddProductToCartUseCase>,
    badge: Arc<CartBadge>,
}

impl CartApi {
    pub fn new(
        store: Arc<CartStore>,
        add_use_case: Arc<dyn AddProductToCartUseCase>,
        badge: Arc<CartBadge>,
    ) -> Self {
        Self {
            store,
            add_use_case,
            badge,
        }
    }

    async fn snapshot(&self) -> CartResponse {
        let snapshot = self.store.snapshot().await;
        CartResponse::new(snapshot.items, snapshot.summary, self.badge.label())
    }

    async fn mutation(&self, change: Option<CartChange>) -> Json<CartMutationResponse> {
        let cart = self.snapshot().await;
        Json(CartMutationResponse::from_change(change, cart))
    }
}

/// Shopping cart API
///
/// The cart is persisted after every change. When the write fails the change
/// still applies in memory and the response reports `persisted: false`.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns line items in insertion order with totals and the badge label.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<CartResponse> {
        Json(self.snapshot().await)
    }

    /// Add a product
    ///
    /// Fetches the product from the catalog and adds it, merging with an
    /// existing line for the same product.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        let params = AddProductToCartParams {
            product_id: ProductId::new(body.0.product_id),
            quantity: body.0.quantity.unwrap_or(1),
        };

        match self.add_use_case.execute(params).await {
            Ok(change) => AddCartItemResponse::Ok(self.mutation(Some(change)).await),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    _ => AddCartItemResponse::BadGateway(json),
                }
            }
        }
    }

    /// Set a quantity
    ///
    /// Zero or negative quantities remove the line. Unknown products leave
    /// the cart unchanged.
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn set_quantity(
        &self,
        id: Path<u64>,
        body: Json<SetQuantityRequest>,
    ) -> Json<CartMutationResponse> {
        let change = self
            .store
            .set_quantity(ProductId::new(id.0), body.0.quantity)
            .await;
        self.mutation(change).await
    }

    /// Remove a product
    ///
    /// Unknown products leave the cart unchanged.
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, id: Path<u64>) -> Json<CartMutationResponse> {
        let change = self.store.remove(ProductId::new(id.0)).await;
        self.mutation(change).await
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> Json<CartMutationResponse> {
        let change = self.store.clear().await;
        self.mutation(Some(change)).await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartMutationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::application::cart::add_product::AddProductToCartUseCaseImpl;
    use business::domain::catalog::errors::FetchError;
    use business::domain::catalog::gateway::CatalogGateway;
    use business::domain::catalog::media::MediaRoot;
    use business::domain::catalog::model::{
        Category, Certificate, City, Company, Partner, Product, ProductImage,
        ServiceCenterDescription, ServiceLocation,
    };
    use business::domain::shared::translation::{Translation, Translations};
    use business::domain::shared::value_objects::{CategoryId, LanguageCode};
    use logger::TracingLogger;
    use persistence::cart::repository::CartRepositoryKeyValue;
    use persistence::kv::MemoryKeyValueStore;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{Endpoint, Route};
    use poem_openapi::OpenApiService;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};

    use crate::observers::toast::ToastNotifier;

    /// Catalog that knows a single product, id 1.
    struct WidgetCatalog {
        media: MediaRoot,
    }

    #[async_trait]
    impl CatalogGateway for WidgetCatalog {
        async fn get_products(&self, _: Option<CategoryId>) -> Result<Vec<Product>, FetchError> {
            Ok(vec![])
        }
        async fn get_product(&self, id: ProductId) -> Result<Product, FetchError> {
            if id != ProductId::new(1) {
                return Err(FetchError::status(404));
            }
            Ok(Product {
                id,
                price: Decimal::new(999, 2),
                translations: Translations::new(vec![
                    Translation::new(Some("en".into())).with_field("name", "Widget"),
                ]),
                category: None,
                sku: None,
                images: vec![],
            })
        }
        async fn get_product_images(&self, _: ProductId) -> Result<Vec<ProductImage>, FetchError> {
            Ok(vec![])
        }
        async fn get_categories(&self) -> Result<Vec<Category>, FetchError> {
            Ok(vec![])
        }
        async fn get_category(&self, _: CategoryId) -> Result<Category, FetchError> {
            Err(FetchError::status(404))
        }
        async fn get_companies(&self) -> Result<Vec<Company>, FetchError> {
            Ok(vec![])
        }
        async fn get_partners(&self) -> Result<Vec<Partner>, FetchError> {
            Ok(vec![])
        }
        async fn get_certificates(&self) -> Result<Vec<Certificate>, FetchError> {
            Ok(vec![])
        }
        async fn get_cities(&self) -> Result<Vec<City>, FetchError> {
            Ok(vec![])
        }
        async fn get_service_locations(&self) -> Result<Vec<ServiceLocation>, FetchError> {
            Ok(vec![])
        }
        async fn get_service_center_descriptions(
            &self,
        ) -> Result<Vec<ServiceCenterDescription>, FetchError> {
            Ok(vec![])
        }
        fn media_url(&self, path: &str) -> String {
            self.media.resolve(Some(path))
        }
    }

    async fn client() -> TestClient<impl Endpoint> {
        let logger = Arc::new(TracingLogger);
        let badge = Arc::new(CartBadge::default());
        let repository = Arc::new(CartRepositoryKeyValue::new(Arc::new(
            MemoryKeyValueStore::new(),
        )));
        let store = Arc::new(
            CartStore::load(repository, logger.clone(), LanguageCode::default())
                .await
                .subscribe(badge.clone())
                .subscribe(Arc::new(ToastNotifier::default())),
        );
        let add_use_case = Arc::new(AddProductToCartUseCaseImpl {
            store: store.clone(),
            gateway: Arc::new(WidgetCatalog {
                media: MediaRoot::new("http://localhost:8000/media"),
            }),
            logger,
        });

        let api = OpenApiService::new(CartApi::new(store, add_use_case, badge), "Cart", "test");
        TestClient::new(Route::new().nest("/", api))
    }

    async fn body(response: poem::test::TestResponse) -> Value {
        let text = response.0.into_body().into_string().await.unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[tokio::test]
    async fn should_add_items_and_report_totals() {
        let cli = client().await;

        cli.post("/cart/items")
            .body_json(&json!({"product_id": 1}))
            .send()
            .await
            .assert_status_is_ok();
        let response = cli
            .post("/cart/items")
            .body_json(&json!({"product_id": 1, "quantity": 2}))
            .send()
            .await;
        response.assert_status_is_ok();

        let json = body(response).await;
        assert_eq!(json["changed"], true);
        assert_eq!(json["event"], "item_added");
        assert_eq!(json["persisted"], true);
        assert_eq!(json["cart"]["total_items"], 3);
        assert_eq!(json["cart"]["total_price"], "29.97");
        assert_eq!(json["cart"]["badge"], "[3]");
        assert_eq!(json["cart"]["items"][0]["name"], "Widget");
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let cli = client().await;

        let response = cli
            .post("/cart/items")
            .body_json(&json!({"product_id": 1, "quantity": 0}))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(response).await["message"], "cart.invalid_quantity");
    }

    #[tokio::test]
    async fn should_return_bad_gateway_for_unknown_product() {
        let cli = client().await;

        let response = cli
            .post("/cart/items")
            .body_json(&json!({"product_id": 2}))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn should_remove_item_when_quantity_set_to_zero() {
        let cli = client().await;
        cli.post("/cart/items")
            .body_json(&json!({"product_id": 1}))
            .send()
            .await
            .assert_status_is_ok();

        let response = cli
            .put("/cart/items/1")
            .body_json(&json!({"quantity": 0}))
            .send()
            .await;

        let json = body(response).await;
        assert_eq!(json["event"], "item_removed");
        assert_eq!(json["cart"]["items"], json!([]));
        assert_eq!(json["cart"]["badge"], "[0]");
    }

    #[tokio::test]
    async fn should_leave_cart_unchanged_when_removing_absent_item() {
        let cli = client().await;

        let response = cli.delete("/cart/items/42").send().await;

        response.assert_status_is_ok();
        let json = body(response).await;
        assert_eq!(json["changed"], false);
        assert_eq!(json["event"], "none");
    }

    #[tokio::test]
    async fn should_clear_cart() {
        let cli = client().await;
        cli.post("/cart/items")
            .body_json(&json!({"product_id": 1, "quantity": 5}))
            .send()
            .await
            .assert_status_is_ok();

        let response = cli.delete("/cart").send().await;
        let json = body(response).await;
        assert_eq!(json["event"], "cleared");

        let cart = body(cli.get("/cart").send().await).await;
        assert_eq!(cart["total_items"], 0);
        assert_eq!(cart["total_price"], "0");
    }
}
