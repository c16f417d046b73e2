use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::text_generator::TextGeneratorGemini;

use business::application::advice::ask::AskAdviceUseCaseImpl;
use business::application::health::check::CheckHealthUseCaseImpl;
use business::domain::advice::services::GeneratorHandle;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub root_api: crate::api::root::routes::RootApi,
    pub advice_api: crate::api::advice::routes::AdviceApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: GeminiConfig) -> Self {
        let api_key_set = gemini_config.api_key_set();
        let generator = init_generator(gemini_config);
        Self::with_generator(generator, api_key_set)
    }

    pub fn with_generator(generator: GeneratorHandle, api_key_set: bool) -> Self {
        let logger = Arc::new(TracingLogger);

        let check_health_use_case = Arc::new(CheckHealthUseCaseImpl::new(&generator, api_key_set));
        let ask_advice_use_case = Arc::new(AskAdviceUseCaseImpl { generator, logger });

        Self {
            health_api: crate::api::health::routes::Api::new(check_health_use_case),
            root_api: crate::api::root::routes::RootApi,
            advice_api: crate::api::advice::routes::AdviceApi::new(ask_advice_use_case),
        }
    }
}

/// Builds the generator handle once. Any failure leaves it unconfigured.
fn init_generator(config: GeminiConfig) -> GeneratorHandle {
    let Some(api_key) = config.api_key else {
        tracing::warn!("GEMINI_API_KEY is not set; /api/ai will answer 500 until restart");
        return GeneratorHandle::Unconfigured;
    };

    match GeminiClient::new(api_key, config.model.clone(), config.base_url) {
        Ok(client) => {
            tracing::info!(model = %config.model, "Initialized Gemini text generator");
            GeneratorHandle::Configured(Arc::new(TextGeneratorGemini::new(client)))
        }
        Err(e) => {
            tracing::error!("Error initializing Gemini: {}", e);
            GeneratorHandle::Unconfigured
        }
    }
}
