use std::env;

use gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Configuration for Gemini API access.
///
/// Environment variables:
/// - GEMINI_API_KEY: API credential (optional, blank counts as missing)
/// - GEMINI_MODEL: model name (default: "gemini-pro")
/// - GEMINI_BASE_URL: REST API base URL (default: public v1beta endpoint)
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("GEMINI_API_KEY").ok(),
            env::var("GEMINI_MODEL").ok(),
            env::var("GEMINI_BASE_URL").ok(),
        )
    }

    fn from_values(
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn api_key_set(&self) -> bool {
        self.api_key.is_some()
    }
}
