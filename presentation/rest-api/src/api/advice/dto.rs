use poem_openapi::{Object, Union};

use business::domain::advice::model::AdviceReply;

#[derive(Debug, Clone, Object)]
pub struct PromptRequest {
    /// The user's health question
    pub prompt: String,
    /// Free-form client context, accepted and ignored
    #[allow(dead_code)]
    pub context: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Object)]
pub struct AdviceTextResponse {
    /// Generated advice, disclaimer included
    pub text: String,
}

#[derive(Debug, Clone, Object)]
pub struct AdviceErrorResponse {
    /// User-facing apology when the AI service could not be reached
    pub error: String,
}

/// Either `{"text": ...}` or `{"error": ...}`, both sent with status 200.
#[derive(Debug, Clone, Union)]
#[oai(one_of)]
pub enum AdviceReplyResponse {
    Text(AdviceTextResponse),
    Error(AdviceErrorResponse),
}

impl From<AdviceReply> for AdviceReplyResponse {
    fn from(reply: AdviceReply) -> Self {
        match reply {
            AdviceReply::Answer(text) => AdviceReplyResponse::Text(AdviceTextResponse { text }),
            AdviceReply::Unavailable(error) => {
                AdviceReplyResponse::Error(AdviceErrorResponse { error })
            }
        }
    }
}
