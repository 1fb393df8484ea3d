use super::{
    api_config::ApiConfig, cors_config, server_config::ServerConfig,
    storage_config::StorageConfig, storefront_config::StorefrontConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub storefront: StorefrontConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            api: ApiConfig::from_env(),
            storage: StorageConfig::from_env(),
            storefront: StorefrontConfig::from_env(),
        }
    }
}
