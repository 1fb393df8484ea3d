use std::str::FromStr;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use business::domain::catalog::model::{
    Category, Certificate, City, Company, Partner, Product, ProductImage,
    ServiceCenterDescription, ServiceLocation, SocialLinks,
};
use business::domain::shared::translation::{Translation, Translations};
use business::domain::shared::value_objects::{CategoryId, LanguageCode, ProductId};

/// Translations as the API sends them: a language-keyed map, a list of
/// records tagged with their language, or something unexpected.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TranslationsDto {
    List(Vec<Option<TranslationRecordDto>>),
    Map(IndexMap<String, IndexMap<String, Value>>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
pub struct TranslationRecordDto {
    language_code: Option<String>,
    language: Option<String>,
    #[serde(flatten)]
    fields: IndexMap<String, Value>,
}

impl TranslationsDto {
    pub fn into_domain(self) -> Translations {
        match self {
            TranslationsDto::List(records) => records
                .into_iter()
                .flatten()
                .map(|record| {
                    let language = record.language_code.or(record.language);
                    translation(language, record.fields)
                })
                .collect::<Vec<_>>()
                .into(),
            TranslationsDto::Map(map) => map
                .into_iter()
                .map(|(language, fields)| translation(Some(language), fields))
                .collect::<Vec<_>>()
                .into(),
            TranslationsDto::Other(Value::Null) => Translations::empty(),
            TranslationsDto::Other(value) => {
                warn!("Unexpected translations shape, ignoring: {}", value);
                Translations::empty()
            }
        }
    }
}

fn translation(language: Option<String>, fields: IndexMap<String, Value>) -> Translation {
    fields
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, text)),
            _ => None,
        })
        .fold(
            Translation::new(language.map(LanguageCode::from)),
            |translation, (key, text)| translation.with_field(key, text),
        )
}

fn translations(dto: Option<TranslationsDto>) -> Translations {
    dto.map(TranslationsDto::into_domain).unwrap_or_default()
}

/// Prices arrive as decimal strings or plain numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceDto {
    Text(String),
    Number(serde_json::Number),
}

impl PriceDto {
    fn into_decimal(self) -> Decimal {
        let raw = match self {
            PriceDto::Text(text) => text,
            PriceDto::Number(number) => number.to_string(),
        };
        Decimal::from_str(raw.trim())
            .or_else(|_| Decimal::from_scientific(raw.trim()))
            .unwrap_or_else(|_| {
                warn!("Unparseable price {:?}, using 0", raw);
                Decimal::ZERO
            })
    }
}

/// A related record referenced either by bare id or as a nested object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RefDto {
    Id(u64),
    Object { id: u64 },
}

impl RefDto {
    fn id(&self) -> u64 {
        match self {
            RefDto::Id(id) | RefDto::Object { id } => *id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubCategoryDto {
    pub id: u64,
    pub category: Option<RefDto>,
}

#[derive(Debug, Deserialize)]
pub struct ProductImageDto {
    pub id: u64,
    pub product: Option<u64>,
    pub image: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub ordering: Option<u32>,
}

impl From<ProductImageDto> for ProductImage {
    fn from(dto: ProductImageDto) -> Self {
        ProductImage {
            id: dto.id,
            product: dto.product.map(ProductId::new),
            image: dto.image,
            alt: dto.alt.unwrap_or_default(),
            ordering: dto.ordering.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: u64,
    pub price: Option<PriceDto>,
    pub translations: Option<TranslationsDto>,
    pub category: Option<RefDto>,
    pub subcategory: Option<SubCategoryDto>,
    pub sku: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<ProductImageDto>>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        let category = dto
            .category
            .as_ref()
            .or_else(|| dto.subcategory.as_ref().and_then(|sub| sub.category.as_ref()))
            .map(|reference| CategoryId::new(reference.id()));

        Product {
            id: ProductId::new(dto.id),
            price: dto
                .price
                .map(PriceDto::into_decimal)
                .unwrap_or(Decimal::ZERO),
            translations: translations(dto.translations),
            category,
            sku: dto.sku,
            images: dto
                .images
                .unwrap_or_default()
                .into_iter()
                .map(ProductImage::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryDto {
    pub id: u64,
    pub translations: Option<TranslationsDto>,
    pub image: Option<String>,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category {
            id: CategoryId::new(dto.id),
            translations: translations(dto.translations),
            image: dto.image,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompanyDto {
    pub id: u64,
    pub translations: Option<TranslationsDto>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub telegram: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
}

impl From<CompanyDto> for Company {
    fn from(dto: CompanyDto) -> Self {
        Company {
            id: dto.id,
            translations: translations(dto.translations),
            phone: dto.phone,
            email: dto.email,
            website: dto.website,
            socials: SocialLinks {
                telegram: dto.telegram,
                instagram: dto.instagram,
                facebook: dto.facebook,
                youtube: dto.youtube,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PartnerDto {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    pub logo: Option<String>,
}

impl From<PartnerDto> for Partner {
    fn from(dto: PartnerDto) -> Self {
        Partner {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            logo: dto.logo,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CertificateDto {
    pub id: u64,
    pub image: Option<String>,
    #[serde(default)]
    pub ordering: Option<u32>,
}

impl From<CertificateDto> for Certificate {
    fn from(dto: CertificateDto) -> Self {
        Certificate {
            id: dto.id,
            image: dto.image,
            ordering: dto.ordering.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CityDto {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<CityDto> for City {
    fn from(dto: CityDto) -> Self {
        City {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServiceCenterDescriptionDto {
    pub id: u64,
    pub translations: Option<TranslationsDto>,
}

impl From<ServiceCenterDescriptionDto> for ServiceCenterDescription {
    fn from(dto: ServiceCenterDescriptionDto) -> Self {
        ServiceCenterDescription {
            id: dto.id,
            translations: translations(dto.translations),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServiceLocationDto {
    pub id: u64,
    pub city: Option<CityDto>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub map_url: Option<String>,
    pub description: Option<ServiceCenterDescriptionDto>,
}

impl From<ServiceLocationDto> for ServiceLocation {
    fn from(dto: ServiceLocationDto) -> Self {
        ServiceLocation {
            id: dto.id,
            city: dto.city.map(City::from),
            address: dto.address.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            email: dto.email,
            map_url: dto.map_url,
            description: dto.description.map(ServiceCenterDescription::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_translations(json: &str) -> Translations {
        serde_json::from_str::<TranslationsDto>(json)
            .unwrap()
            .into_domain()
    }

    #[test]
    fn should_normalise_language_keyed_map_in_document_order() {
        let translations = parse_translations(
            r#"{"uz": {"name": "Olma"}, "en": {"name": "Apple", "description": "Red"}}"#,
        );

        assert_eq!(translations.len(), 2);
        assert_eq!(
            translations.resolve_field(&LanguageCode::new("en"), "description"),
            Some("Red")
        );
        assert_eq!(
            translations.resolve_field(&LanguageCode::new("ru"), "name"),
            Some("Olma")
        );
    }

    #[test]
    fn should_normalise_tagged_record_list() {
        let translations = parse_translations(
            r#"[
                {"language_code": "ru", "name": "Yabloko"},
                null,
                {"language": "en", "name": "Apple"}
            ]"#,
        );

        assert_eq!(translations.len(), 2);
        assert_eq!(
            translations.resolve_field(&LanguageCode::new("en"), "name"),
            Some("Apple")
        );
        assert_eq!(
            translations.resolve_field(&LanguageCode::new("de"), "name"),
            Some("Yabloko")
        );
    }

    #[test]
    fn should_treat_unexpected_shape_as_empty() {
        assert!(parse_translations(r#""just a string""#).is_empty());
        assert!(parse_translations("42").is_empty());
        assert!(parse_translations("null").is_empty());
    }

    #[test]
    fn should_ignore_non_text_fields() {
        let translations = parse_translations(r#"{"en": {"name": "Apple", "rank": 3}}"#);

        let record = translations.resolve(&LanguageCode::new("en")).unwrap();
        assert_eq!(record.name(), Some("Apple"));
        assert_eq!(record.field("rank"), None);
    }

    #[test]
    fn should_convert_product_with_string_price_and_subcategory() {
        let dto: ProductDto = serde_json::from_str(
            r#"{
                "id": 12,
                "price": "19.90",
                "sku": "HNY-12",
                "translations": {"en": {"name": "Honey"}},
                "subcategory": {"id": 4, "category": {"id": 2, "slug": "food"}},
                "images": [{"id": 1, "product": 12, "image": "/media/p.jpg", "alt": "", "ordering": 0}]
            }"#,
        )
        .unwrap();

        let product = Product::from(dto);

        assert_eq!(product.id, ProductId::new(12));
        assert_eq!(product.price, Decimal::new(1990, 2));
        assert_eq!(product.category, Some(CategoryId::new(2)));
        assert_eq!(product.main_image_path(), Some("/media/p.jpg"));
    }

    #[test]
    fn should_default_missing_price_to_zero_and_accept_numbers() {
        let missing: ProductDto = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        let numeric: ProductDto =
            serde_json::from_str(r#"{"id": 2, "price": 7.5, "category": 3}"#).unwrap();

        assert_eq!(Product::from(missing).price, Decimal::ZERO);
        let numeric = Product::from(numeric);
        assert_eq!(numeric.price, Decimal::new(75, 1));
        assert_eq!(numeric.category, Some(CategoryId::new(3)));
    }

    #[test]
    fn should_map_company_socials() {
        let dto: CompanyDto = serde_json::from_str(
            r#"{"id": 1, "telegram": "https://t.me/shop", "phone": "+1", "translations": []}"#,
        )
        .unwrap();

        let company = Company::from(dto);

        assert_eq!(company.socials.telegram.as_deref(), Some("https://t.me/shop"));
        assert!(company.translations.is_empty());
    }

    #[test]
    fn should_decode_service_location_with_nested_city_and_description() {
        let dto: ServiceLocationDto = serde_json::from_str(
            r#"{
                "id": 4,
                "city": {"id": 2, "name": "Tashkent"},
                "address": "Amir Temur 1",
                "phone": "+998 71 000 00 00",
                "email": null,
                "map_url": "https://maps.example/4",
                "description": {
                    "id": 9,
                    "translations": {
                        "uz": {"description": "Servis markazi"},
                        "ru": {"description": "Сервисный центр"}
                    }
                }
            }"#,
        )
        .unwrap();

        let location = ServiceLocation::from(dto);

        assert_eq!(location.city, Some(City { id: 2, name: "Tashkent".to_string() }));
        assert_eq!(location.address, "Amir Temur 1");
        assert_eq!(location.email, None);
        assert_eq!(location.map_url.as_deref(), Some("https://maps.example/4"));
        let description = location.description.unwrap();
        assert_eq!(description.id, 9);
        assert_eq!(
            description
                .translations
                .resolve_field(&LanguageCode::from("ru"), "description"),
            Some("Сервисный центр")
        );
    }

    #[test]
    fn should_decode_service_location_without_optional_parts() {
        let dto: ServiceLocationDto = serde_json::from_str(r#"{"id": 5}"#).unwrap();

        let location = ServiceLocation::from(dto);

        assert_eq!(location.city, None);
        assert_eq!(location.description, None);
        assert_eq!(location.address, "");
        assert_eq!(location.phone, "");
    }

    #[test]
    fn should_decode_service_center_description_list() {
        let dtos: Vec<ServiceCenterDescriptionDto> = serde_json::from_str(
            r#"[
                {"id": 1, "translations": [{"language_code": "en", "description": "Repairs"}]},
                {"id": 2, "translations": null}
            ]"#,
        )
        .unwrap();

        let descriptions: Vec<ServiceCenterDescription> =
            dtos.into_iter().map(ServiceCenterDescription::from).collect();

        assert_eq!(
            descriptions[0]
                .translations
                .resolve_field(&LanguageCode::default(), "description"),
            Some("Repairs")
        );
        assert!(descriptions[1].translations.is_empty());
    }
}
