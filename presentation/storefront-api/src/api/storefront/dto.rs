use poem_openapi::Object;

use business::domain::catalog::model::{Certificate, Partner, SocialLinks};
use business::domain::catalog::storefront::{
    CategorySummary, CompanyProfile, ProductCard, ProductListing, StorefrontPage,
};

#[derive(Debug, Clone, Object)]
pub struct SocialLinksResponse {
    #[oai(skip_serializing_if_is_none)]
    pub telegram: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub instagram: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub facebook: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub youtube: Option<String>,
}

impl From<SocialLinks> for SocialLinksResponse {
    fn from(links: SocialLinks) -> Self {
        Self {
            telegram: links.telegram,
            instagram: links.instagram,
            facebook: links.facebook,
            youtube: links.youtube,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CompanyResponse {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub about_us: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub website: Option<String>,
    pub socials: SocialLinksResponse,
}

impl From<CompanyProfile> for CompanyResponse {
    fn from(company: CompanyProfile) -> Self {
        Self {
            name: company.name,
            address: company.address,
            about_us: company.about_us,
            phone: company.phone,
            email: company.email,
            website: company.website,
            socials: company.socials.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductCardResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Absolute image URL, or the bundled placeholder path
    pub image: String,
    pub category_name: String,
    /// Decimal price as a string, e.g. "9.99"
    pub price: String,
}

impl From<ProductCard> for ProductCardResponse {
    fn from(card: ProductCard) -> Self {
        Self {
            id: card.id.value(),
            name: card.name,
            description: card.description,
            image: card.image,
            category_name: card.category_name,
            price: card.price.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListingResponse {
    /// One of "loaded", "empty" or "unavailable"
    pub status: String,
    pub items: Vec<ProductCardResponse>,
    /// Failure message when the products could not be fetched
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl From<ProductListing> for ProductListingResponse {
    fn from(listing: ProductListing) -> Self {
        match listing {
            ProductListing::Loaded(cards) => Self {
                status: "loaded".to_string(),
                items: cards.into_iter().map(Into::into).collect(),
                message: None,
            },
            ProductListing::Empty => Self {
                status: "empty".to_string(),
                items: Vec::new(),
                message: None,
            },
            ProductListing::Unavailable(message) => Self {
                status: "unavailable".to_string(),
                items: Vec::new(),
                message: Some(message),
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: u64,
    pub name: String,
}

impl From<CategorySummary> for CategoryResponse {
    fn from(category: CategorySummary) -> Self {
        Self {
            id: category.id.value(),
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PartnerResponse {
    pub id: u64,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub logo: Option<String>,
}

impl From<Partner> for PartnerResponse {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            name: partner.name,
            logo: partner.logo,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CertificateResponse {
    pub id: u64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub ordering: u32,
}

impl From<Certificate> for CertificateResponse {
    fn from(certificate: Certificate) -> Self {
        Self {
            id: certificate.id,
            image: certificate.image,
            ordering: certificate.ordering,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StorefrontResponse {
    #[oai(skip_serializing_if_is_none)]
    pub company: Option<CompanyResponse>,
    pub products: ProductListingResponse,
    pub categories: Vec<CategoryResponse>,
    pub partners: Vec<PartnerResponse>,
    pub certificates: Vec<CertificateResponse>,
}

impl From<StorefrontPage> for StorefrontResponse {
    fn from(page: StorefrontPage) -> Self {
        Self {
            company: page.company.map(Into::into),
            products: page.products.into(),
            categories: page.categories.into_iter().map(Into::into).collect(),
            partners: page.partners.into_iter().map(Into::into).collect(),
            certificates: page.certificates.into_iter().map(Into::into).collect(),
        }
    }
}
