use std::env;
use std::path::PathBuf;

/// Directory holding the persisted cart.
///
/// Environment variables:
/// - CART_STORAGE_DIR (default: ".storefront")
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let dir = env::var("CART_STORAGE_DIR").unwrap_or_else(|_| ".storefront".to_string());
        Self {
            dir: PathBuf::from(dir),
        }
    }
}
