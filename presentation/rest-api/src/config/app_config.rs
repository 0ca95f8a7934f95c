use super::env::ConfigError;
use super::{
    cors_config, inventory_config::InventoryConfig, openai_config::OpenAIConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub openai: OpenAIConfig,
    pub inventory: InventoryConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            openai: OpenAIConfig::from_env()?,
            inventory: InventoryConfig::from_env(),
        })
    }
}
