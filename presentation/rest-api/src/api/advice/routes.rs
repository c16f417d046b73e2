use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::advice::use_cases::ask::{AskAdviceParams, AskAdviceUseCase};

use crate::api::advice::dto::{AdviceReplyResponse, PromptRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AdviceApi {
    ask_use_case: Arc<dyn AskAdviceUseCase>,
}

impl AdviceApi {
    pub fn new(ask_use_case: Arc<dyn AskAdviceUseCase>) -> Self {
        Self { ask_use_case }
    }
}

/// Advice API
///
/// Forwards health questions to Gemini behind the MediAid persona.
#[OpenApi]
impl AdviceApi {
    /// Ask MediAid
    ///
    /// Returns `{"text"}` with a disclaimer appended, or `{"error"}` with an
    /// apology when the AI service fails. Both use status 200; only missing
    /// configuration (500) and an empty prompt (400) produce error statuses.
    #[oai(path = "/api/ai", method = "post", tag = "ApiTags::Advice")]
    async fn ask(&self, body: Json<PromptRequest>) -> AskAdviceResponse {
        let params = AskAdviceParams {
            prompt: body.0.prompt,
        };

        match self.ask_use_case.execute(params).await {
            Ok(reply) => AskAdviceResponse::Ok(Json(reply.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AskAdviceResponse::BadRequest(json),
                    _ => AskAdviceResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AskAdviceResponse {
    #[oai(status = 200)]
    Ok(Json<AdviceReplyResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
