use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::advice::errors::AdviceError;
use crate::domain::advice::model::{AdviceReply, Prompt, append_disclaimer};
use crate::domain::advice::prompt::build_persona_prompt;
use crate::domain::advice::services::GeneratorHandle;
use crate::domain::advice::use_cases::ask::{AskAdviceParams, AskAdviceUseCase};
use crate::domain::logger::Logger;

pub struct AskAdviceUseCaseImpl {
    pub generator: GeneratorHandle,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AskAdviceUseCase for AskAdviceUseCaseImpl {
    async fn execute(&self, params: AskAdviceParams) -> Result<AdviceReply, AdviceError> {
        // Configuration is checked before the prompt, so an unconfigured
        // service answers 500 whatever the input.
        let Some(generator) = self.generator.service() else {
            self.logger
                .error("Advice requested but the text generator is not configured");
            return Err(AdviceError::NotConfigured);
        };

        let prompt = Prompt::parse(&params.prompt)?;
        let request_id = Uuid::new_v4();

        self.logger.info(&format!(
            "[{}] Generating advice for prompt of {} chars",
            request_id,
            prompt.as_str().chars().count()
        ));

        match generator.generate(&build_persona_prompt(&prompt)).await {
            Ok(text) => {
                self.logger
                    .debug(&format!("[{}] Generation succeeded", request_id));
                Ok(AdviceReply::Answer(append_disclaimer(text)))
            }
            Err(err) => {
                self.logger
                    .error(&format!("[{}] Gemini API error: {}", request_id, err));
                Ok(AdviceReply::unavailable())
            }
        }
    }
}
