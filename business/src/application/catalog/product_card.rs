use std::collections::HashMap;

use crate::domain::cart::model::UNNAMED_PRODUCT;
use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::catalog::model::{Product, first_image_path};
use crate::domain::catalog::storefront::{
    DEFAULT_CATEGORY_NAME, DEFAULT_PRODUCT_IMAGE, ProductCard,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{CategoryId, LanguageCode};

/// Path of a product's main image: embedded images first, then a lookup
/// through the product-images endpoint. Lookup failures are logged.
async fn main_image_path(
    gateway: &dyn CatalogGateway,
    logger: &dyn Logger,
    product: &Product,
) -> Option<String> {
    if let Some(path) = product.main_image_path() {
        return Some(path.to_string());
    }

    match gateway.get_product_images(product.id).await {
        Ok(images) => first_image_path(&images).map(str::to_string),
        Err(err) => {
            logger.warn(&format!(
                "Could not load images for product {}: {}",
                product.id, err
            ));
            None
        }
    }
}

/// Media URL of a product's main image, or the placeholder image.
pub(crate) async fn main_image_url(
    gateway: &dyn CatalogGateway,
    logger: &dyn Logger,
    product: &Product,
) -> String {
    let url = match main_image_path(gateway, logger, product).await {
        Some(path) => gateway.media_url(&path),
        None => String::new(),
    };
    if url.is_empty() {
        DEFAULT_PRODUCT_IMAGE.to_string()
    } else {
        url
    }
}

/// Builds product cards for one page load, caching category names.
pub struct ProductCardBuilder<'a> {
    gateway: &'a dyn CatalogGateway,
    logger: &'a dyn Logger,
    language: &'a LanguageCode,
    category_names: HashMap<CategoryId, String>,
}

impl<'a> ProductCardBuilder<'a> {
    pub fn new(
        gateway: &'a dyn CatalogGateway,
        logger: &'a dyn Logger,
        language: &'a LanguageCode,
    ) -> Self {
        Self {
            gateway,
            logger,
            language,
            category_names: HashMap::new(),
        }
    }

    pub async fn build(&mut self, product: &Product) -> ProductCard {
        let translation = product.translations.resolve(self.language);
        let name = translation
            .and_then(|t| t.name())
            .unwrap_or(UNNAMED_PRODUCT)
            .to_string();
        let description = translation
            .and_then(|t| t.description())
            .unwrap_or_default()
            .to_string();

        let image = main_image_url(self.gateway, self.logger, product).await;

        let category_name = self.category_name(product.category).await;

        ProductCard {
            id: product.id,
            name,
            description,
            image,
            category_name,
            price: product.price,
        }
    }

    async fn category_name(&mut self, category: Option<CategoryId>) -> String {
        let Some(id) = category else {
            return DEFAULT_CATEGORY_NAME.to_string();
        };
        if let Some(name) = self.category_names.get(&id) {
            return name.clone();
        }

        let name = match self.gateway.get_category(id).await {
            Ok(category) => category
                .translations
                .resolve_field(self.language, "name")
                .unwrap_or(DEFAULT_CATEGORY_NAME)
                .to_string(),
            Err(err) => {
                self.logger
                    .warn(&format!("Could not load category {}: {}", id, err));
                DEFAULT_CATEGORY_NAME.to_string()
            }
        };
        self.category_names.insert(id, name.clone());
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::errors::FetchError;
    use crate::domain::catalog::media::MediaRoot;
    use crate::domain::catalog::model::{
        Category, Certificate, City, Company, Partner, ProductImage, ServiceCenterDescription,
        ServiceLocation,
    };
    use crate::domain::shared::translation::{Translation, Translations};
    use crate::domain::shared::value_objects::ProductId;
    use async_trait::async_trait;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl CatalogGateway for Gateway {
            async fn get_products(&self, category: Option<CategoryId>) -> Result<Vec<Product>, FetchError>;
            async fn get_product(&self, id: ProductId) -> Result<Product, FetchError>;
            async fn get_product_images(&self, id: ProductId) -> Result<Vec<ProductImage>, FetchError>;
            async fn get_categories(&self) -> Result<Vec<Category>, FetchError>;
            async fn get_category(&self, id: CategoryId) -> Result<Category, FetchError>;
            async fn get_companies(&self) -> Result<Vec<Company>, FetchError>;
            async fn get_partners(&self) -> Result<Vec<Partner>, FetchError>;
            async fn get_certificates(&self) -> Result<Vec<Certificate>, FetchError>;
            async fn get_cities(&self) -> Result<Vec<City>, FetchError>;
            async fn get_service_locations(&self) -> Result<Vec<ServiceLocation>, FetchError>;
            async fn get_service_center_descriptions(&self) -> Result<Vec<ServiceCenterDescription>, FetchError>;
            fn media_url(&self, path: &str) -> String;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn quiet_logger() -> MockLog {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
    }

    fn gateway_with_media() -> MockGateway {
        let mut gateway = MockGateway::new();
        let root = MediaRoot::new("http://localhost:8000/media/");
        gateway
            .expect_media_url()
            .returning(move |path| root.resolve(Some(path)));
        gateway
    }

    fn product(id: u64, category: Option<u64>, images: Vec<ProductImage>) -> Product {
        Product {
            id: ProductId::new(id),
            price: Decimal::new(1250, 2),
            translations: Translations::new(vec![
                Translation::new(Some("en".into()))
                    .with_field("name", "Honey")
                    .with_field("description", "Raw mountain honey"),
            ]),
            category: category.map(CategoryId::new),
            sku: None,
            images,
        }
    }

    fn image(path: &str) -> ProductImage {
        ProductImage {
            id: 1,
            product: None,
            image: Some(path.to_string()),
            alt: String::new(),
            ordering: 0,
        }
    }

    fn sweets(id: CategoryId) -> Category {
        Category {
            id,
            translations: Translations::new(vec![
                Translation::new(Some("en".into())).with_field("name", "Sweets"),
            ]),
            image: None,
        }
    }

    #[tokio::test]
    async fn should_build_card_from_translation_and_embedded_image() {
        let mut gateway = gateway_with_media();
        gateway.expect_get_product_images().never();
        gateway
            .expect_get_category()
            .returning(|id| Ok(sweets(id)));
        let logger = quiet_logger();
        let language = LanguageCode::new("en");

        let mut builder = ProductCardBuilder::new(&gateway, &logger, &language);
        let card = builder
            .build(&product(1, Some(3), vec![image("/products/honey.jpg")]))
            .await;

        assert_eq!(card.name, "Honey");
        assert_eq!(card.description, "Raw mountain honey");
        assert_eq!(card.image, "http://localhost:8000/media/products/honey.jpg");
        assert_eq!(card.category_name, "Sweets");
        assert_eq!(card.price, Decimal::new(1250, 2));
    }

    #[tokio::test]
    async fn should_fall_back_to_default_image_and_category() {
        let mut gateway = gateway_with_media();
        gateway
            .expect_get_product_images()
            .returning(|_| Err(FetchError::status(500)));
        gateway.expect_get_category().never();
        let logger = quiet_logger();
        let language = LanguageCode::new("en");

        let mut builder = ProductCardBuilder::new(&gateway, &logger, &language);
        let card = builder.build(&product(1, None, vec![])).await;

        assert_eq!(card.image, DEFAULT_PRODUCT_IMAGE);
        assert_eq!(card.category_name, DEFAULT_CATEGORY_NAME);
    }

    #[tokio::test]
    async fn should_fall_back_to_unnamed_product_without_translations() {
        let gateway = gateway_with_media();
        let logger = quiet_logger();
        let language = LanguageCode::new("en");
        let untranslated = Product {
            translations: Translations::empty(),
            ..product(1, None, vec![image("a.png")])
        };

        let mut builder = ProductCardBuilder::new(&gateway, &logger, &language);
        let card = builder.build(&untranslated).await;

        assert_eq!(card.name, UNNAMED_PRODUCT);
        assert_eq!(card.description, "");
    }

    #[tokio::test]
    async fn should_fetch_each_category_once_per_builder() {
        let mut gateway = gateway_with_media();
        gateway
            .expect_get_category()
            .times(1)
            .returning(|id| Ok(sweets(id)));
        let logger = quiet_logger();
        let language = LanguageCode::new("en");

        let mut builder = ProductCardBuilder::new(&gateway, &logger, &language);
        let first = builder.build(&product(1, Some(3), vec![image("a.png")])).await;
        let second = builder.build(&product(2, Some(3), vec![image("b.png")])).await;

        assert_eq!(first.category_name, "Sweets");
        assert_eq!(second.category_name, "Sweets");
    }

    #[tokio::test]
    async fn should_use_default_category_name_when_lookup_fails() {
        let mut gateway = gateway_with_media();
        gateway
            .expect_get_category()
            .returning(|_| Err(FetchError::network("connection refused")));
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());
        let language = LanguageCode::new("en");

        let mut builder = ProductCardBuilder::new(&gateway, &logger, &language);
        let card = builder.build(&product(1, Some(3), vec![image("a.png")])).await;

        assert_eq!(card.category_name, DEFAULT_CATEGORY_NAME);
    }
}
