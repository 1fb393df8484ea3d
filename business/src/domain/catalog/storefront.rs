use rust_decimal::Decimal;

use crate::domain::shared::value_objects::{CategoryId, ProductId};

use super::model::{Certificate, Partner, SocialLinks};

pub const DEFAULT_PRODUCT_IMAGE: &str = "images/product-1.png";
pub const DEFAULT_CATEGORY_NAME: &str = "Lifestyle";
pub const DEFAULT_MENU_CATEGORY_NAME: &str = "Category";

/// Display data for one product tile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category_name: String,
    pub price: Decimal,
}

/// Company details for the header and footer.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    pub name: Option<String>,
    pub address: Option<String>,
    pub about_us: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub socials: SocialLinks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductListing {
    Loaded(Vec<ProductCard>),
    Empty,
    /// The product fetch failed; carries the failure message.
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontPage {
    pub company: Option<CompanyProfile>,
    pub products: ProductListing,
    pub categories: Vec<CategorySummary>,
    /// Logos resolved to absolute URLs.
    pub partners: Vec<Partner>,
    /// Images resolved to absolute URLs.
    pub certificates: Vec<Certificate>,
}
