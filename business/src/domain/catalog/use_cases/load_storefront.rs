use async_trait::async_trait;

use crate::domain::catalog::storefront::StorefrontPage;
use crate::domain::shared::value_objects::{CategoryId, LanguageCode};

pub struct LoadStorefrontParams {
    pub category: Option<CategoryId>,
    /// Overrides the configured language for this load.
    pub language: Option<LanguageCode>,
}

/// Assembles everything the storefront page renders.
///
/// Never fails: each section degrades to its fallback when its fetch fails.
#[async_trait]
pub trait LoadStorefrontUseCase: Send + Sync {
    async fn execute(&self, params: LoadStorefrontParams) -> StorefrontPage;
}
