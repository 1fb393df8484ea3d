use std::env;

use business::domain::shared::value_objects::LanguageCode;

/// Environment variables:
/// - STOREFRONT_LANGUAGE: language used to resolve translations (default: "en")
pub struct StorefrontConfig {
    pub language: LanguageCode,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        let language = env::var("STOREFRONT_LANGUAGE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(LanguageCode::from)
            .unwrap_or_default();

        Self { language }
    }
}
