use rust_decimal::Decimal;

use crate::domain::shared::translation::Translations;
use crate::domain::shared::value_objects::{CategoryId, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub price: Decimal,
    pub translations: Translations,
    pub category: Option<CategoryId>,
    pub sku: Option<String>,
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Path of the first image by display ordering, if any image has one.
    pub fn main_image_path(&self) -> Option<&str> {
        first_image_path(&self.images)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub id: u64,
    pub product: Option<ProductId>,
    pub image: Option<String>,
    pub alt: String,
    pub ordering: u32,
}

/// Picks the image path with the lowest `ordering` (ties keep input order).
pub fn first_image_path(images: &[ProductImage]) -> Option<&str> {
    images
        .iter()
        .filter(|img| img.image.as_deref().is_some_and(|p| !p.is_empty()))
        .min_by_key(|img| img.ordering)
        .and_then(|img| img.image.as_deref())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub translations: Translations,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SocialLinks {
    pub telegram: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: u64,
    pub translations: Translations,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub socials: SocialLinks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Partner {
    pub id: u64,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    pub id: u64,
    pub image: Option<String>,
    pub ordering: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCenterDescription {
    pub id: u64,
    pub translations: Translations,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLocation {
    pub id: u64,
    pub city: Option<City>,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub map_url: Option<String>,
    pub description: Option<ServiceCenterDescription>,
}
