use std::time::Duration;

use reqwest::Client;

/// Default Gemini REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default text model.
pub const DEFAULT_MODEL: &str = "gemini-pro";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ClientInitError {
    #[error("gemini.empty_api_key")]
    EmptyApiKey,
    #[error("gemini.http_client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
    ) -> Result<Self, ClientInitError> {
        if api_key.trim().is_empty() {
            return Err(ClientInitError::EmptyApiKey);
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the generateContent endpoint URL for the configured model,
    /// without the credential.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}
