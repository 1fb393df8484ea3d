use std::collections::HashMap;

use super::value_objects::LanguageCode;

/// One language's worth of translated text fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    pub language_code: Option<LanguageCode>,
    pub fields: HashMap<String, String>,
}

impl Translation {
    pub fn new(language_code: Option<LanguageCode>) -> Self {
        Self {
            language_code,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns a field value; blank values count as missing.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.field("description")
    }

    pub fn address(&self) -> Option<&str> {
        self.field("address")
    }

    pub fn about_us(&self) -> Option<&str> {
        self.field("about_us")
    }
}

/// Ordered collection of translations for a single entity.
///
/// Upstream data arrives either keyed by language or as a list of tagged
/// records; adapters normalise both into this shape, keeping document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translations(Vec<Translation>);

impl Translations {
    pub fn new(records: Vec<Translation>) -> Self {
        Self(records)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Picks the record for `language`, falling back to the first record.
    pub fn resolve(&self, language: &LanguageCode) -> Option<&Translation> {
        self.0
            .iter()
            .find(|t| t.language_code.as_ref() == Some(language))
            .or_else(|| self.0.first())
    }

    pub fn resolve_field(&self, language: &LanguageCode, key: &str) -> Option<&str> {
        self.resolve(language).and_then(|t| t.field(key))
    }
}

impl From<Vec<Translation>> for Translations {
    fn from(records: Vec<Translation>) -> Self {
        Self(records)
    }
}
