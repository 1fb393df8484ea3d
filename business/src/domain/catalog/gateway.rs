use async_trait::async_trait;

use crate::domain::shared::value_objects::{CategoryId, ProductId};

use super::errors::FetchError;
use super::model::{
    Category, Certificate, City, Company, Partner, Product, ProductImage,
    ServiceCenterDescription, ServiceLocation,
};

/// Read-only port onto the remote catalog API.
///
/// Every call resolves to `Ok(data)` or a `FetchError`; adapters must not
/// panic on network, status or decoding failures.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// All products, or only those in `category` when given.
    async fn get_products(&self, category: Option<CategoryId>)
    -> Result<Vec<Product>, FetchError>;
    async fn get_product(&self, id: ProductId) -> Result<Product, FetchError>;
    async fn get_product_images(&self, id: ProductId) -> Result<Vec<ProductImage>, FetchError>;
    async fn get_categories(&self) -> Result<Vec<Category>, FetchError>;
    async fn get_category(&self, id: CategoryId) -> Result<Category, FetchError>;
    /// Company records; the storefront uses the first one.
    async fn get_companies(&self) -> Result<Vec<Company>, FetchError>;
    async fn get_partners(&self) -> Result<Vec<Partner>, FetchError>;
    async fn get_certificates(&self) -> Result<Vec<Certificate>, FetchError>;
    async fn get_cities(&self) -> Result<Vec<City>, FetchError>;
    async fn get_service_locations(&self) -> Result<Vec<ServiceLocation>, FetchError>;
    async fn get_service_center_descriptions(
        &self,
    ) -> Result<Vec<ServiceCenterDescription>, FetchError>;

    /// Absolute URL for a possibly relative media path; `""` for an empty path.
    fn media_url(&self, path: &str) -> String;
}
