use async_trait::async_trait;
use serde::de::DeserializeOwned;

use business::domain::catalog::errors::FetchError;
use business::domain::catalog::gateway::CatalogGateway;
use business::domain::catalog::model::{
    Category, Certificate, City, Company, Partner, Product, ProductImage,
    ServiceCenterDescription, ServiceLocation,
};
use business::domain::shared::value_objects::{CategoryId, ProductId};

use crate::client::ApiClient;
use crate::dto::{
    CategoryDto, CertificateDto, CityDto, CompanyDto, PartnerDto, ProductDto, ProductImageDto,
    ServiceCenterDescriptionDto, ServiceLocationDto,
};

impl ApiClient {
    async fn fetch_list<D, T>(&self, path: &str) -> Result<Vec<T>, FetchError>
    where
        D: DeserializeOwned,
        T: From<D>,
    {
        let records: Vec<D> = self.fetch(path).await?;
        Ok(records.into_iter().map(T::from).collect())
    }
}

#[async_trait]
impl CatalogGateway for ApiClient {
    async fn get_products(&self, category: Option<CategoryId>) -> Result<Vec<Product>, FetchError> {
        let path = match category {
            Some(id) => format!("/products/?category={}", id),
            None => "/products/all/".to_string(),
        };
        self.fetch_list::<ProductDto, _>(&path).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, FetchError> {
        let dto: ProductDto = self.fetch(&format!("/products/{}/", id)).await?;
        Ok(dto.into())
    }

    async fn get_product_images(&self, id: ProductId) -> Result<Vec<ProductImage>, FetchError> {
        self.fetch_list::<ProductImageDto, _>(&format!("/product-images/?product={}", id))
            .await
    }

    async fn get_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.fetch_list::<CategoryDto, _>("/categories/").await
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, FetchError> {
        let dto: CategoryDto = self.fetch(&format!("/categories/{}/", id)).await?;
        Ok(dto.into())
    }

    async fn get_companies(&self) -> Result<Vec<Company>, FetchError> {
        self.fetch_list::<CompanyDto, _>("/companies/").await
    }

    async fn get_partners(&self) -> Result<Vec<Partner>, FetchError> {
        self.fetch_list::<PartnerDto, _>("/partners/").await
    }

    async fn get_certificates(&self) -> Result<Vec<Certificate>, FetchError> {
        self.fetch_list::<CertificateDto, _>("/certificates/").await
    }

    async fn get_cities(&self) -> Result<Vec<City>, FetchError> {
        self.fetch_list::<CityDto, _>("/cities/").await
    }

    async fn get_service_locations(&self) -> Result<Vec<ServiceLocation>, FetchError> {
        self.fetch_list::<ServiceLocationDto, _>("/service-locations/")
            .await
    }

    async fn get_service_center_descriptions(
        &self,
    ) -> Result<Vec<ServiceCenterDescription>, FetchError> {
        self.fetch_list::<ServiceCenterDescriptionDto, _>("/service-center-descriptions/")
            .await
    }

    fn media_url(&self, path: &str) -> String {
        self.media().resolve(Some(path))
    }
}
