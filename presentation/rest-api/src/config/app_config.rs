use super::{cors_config, gemini_config::GeminiConfig, server_config::ServerConfig};
use poem::middleware::Cors;

/// Everything read from the environment at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            gemini: GeminiConfig::from_env(),
        }
    }
}
