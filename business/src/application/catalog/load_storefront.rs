use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::product_card::ProductCardBuilder;
use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::catalog::model::{Certificate, Company, Partner};
use crate::domain::catalog::storefront::{
    CategorySummary, CompanyProfile, DEFAULT_MENU_CATEGORY_NAME, ProductListing, StorefrontPage,
};
use crate::domain::catalog::use_cases::load_storefront::{
    LoadStorefrontParams, LoadStorefrontUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{CategoryId, LanguageCode};

pub struct LoadStorefrontUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
    pub language: LanguageCode,
}

impl LoadStorefrontUseCaseImpl {
    async fn company(&self, language: &LanguageCode) -> Option<CompanyProfile> {
        match self.gateway.get_companies().await {
            Ok(companies) => {
                let company = companies.into_iter().next();
                if company.is_none() {
                    self.logger.warn("No company data available");
                }
                company.map(|company| company_profile(company, language))
            }
            Err(err) => {
                self.logger
                    .error(&format!("Error loading company data: {}", err));
                None
            }
        }
    }

    async fn products(
        &self,
        category: Option<CategoryId>,
        language: &LanguageCode,
    ) -> ProductListing {
        let products = match self.gateway.get_products(category).await {
            Ok(products) => products,
            Err(err) => {
                self.logger
                    .error(&format!("Error loading products: {}", err));
                return ProductListing::Unavailable(err.to_string());
            }
        };
        if products.is_empty() {
            return ProductListing::Empty;
        }

        let mut builder =
            ProductCardBuilder::new(self.gateway.as_ref(), self.logger.as_ref(), language);
        let mut cards = Vec::with_capacity(products.len());
        for product in &products {
            cards.push(builder.build(product).await);
        }
        ProductListing::Loaded(cards)
    }

    async fn categories(&self, language: &LanguageCode) -> Vec<CategorySummary> {
        match self.gateway.get_categories().await {
            Ok(categories) => categories
                .into_iter()
                .map(|category| CategorySummary {
                    id: category.id,
                    name: category
                        .translations
                        .resolve_field(language, "name")
                        .unwrap_or(DEFAULT_MENU_CATEGORY_NAME)
                        .to_string(),
                })
                .collect(),
            Err(err) => {
                self.logger
                    .error(&format!("Error loading categories: {}", err));
                Vec::new()
            }
        }
    }

    async fn partners(&self) -> Vec<Partner> {
        match self.gateway.get_partners().await {
            Ok(partners) => partners
                .into_iter()
                .map(|partner| Partner {
                    logo: self.resolve_media(partner.logo.as_deref()),
                    ..partner
                })
                .collect(),
            Err(err) => {
                self.logger
                    .error(&format!("Error loading partners: {}", err));
                Vec::new()
            }
        }
    }

    async fn certificates(&self) -> Vec<Certificate> {
        match self.gateway.get_certificates().await {
            Ok(certificates) => certificates
                .into_iter()
                .map(|certificate| Certificate {
                    image: self.resolve_media(certificate.image.as_deref()),
                    ..certificate
                })
                .collect(),
            Err(err) => {
                self.logger
                    .error(&format!("Error loading certificates: {}", err));
                Vec::new()
            }
        }
    }

    fn resolve_media(&self, path: Option<&str>) -> Option<String> {
        Some(self.gateway.media_url(path.unwrap_or_default())).filter(|url| !url.is_empty())
    }
}

fn company_profile(company: Company, language: &LanguageCode) -> CompanyProfile {
    let translation = company.translations.resolve(language);
    let field = |value: Option<&str>| value.map(str::to_string);

    CompanyProfile {
        name: field(translation.and_then(|t| t.name())),
        address: field(translation.and_then(|t| t.address())),
        about_us: field(translation.and_then(|t| t.about_us())),
        phone: company.phone,
        email: company.email,
        website: company.website,
        socials: company.socials,
    }
}

#[async_trait]
impl LoadStorefrontUseCase for LoadStorefrontUseCaseImpl {
    async fn execute(&self, params: LoadStorefrontParams) -> StorefrontPage {
        let language = params.language.unwrap_or_else(|| self.language.clone());
        self.logger.debug(&format!(
            "Loading storefront (category: {:?}, language: {})",
            params.category.map(|id| id.value()),
            language
        ));

        let company = self.company(&language).await;
        let products = self.products(params.category, &language).await;
        let categories = self.categories(&language).await;
        let partners = self.partners().await;
        let certificates = self.certificates().await;

        StorefrontPage {
            company,
            products,
            categories,
            partners,
            certificates,
        }
    }
}
