use async_trait::async_trait;

use crate::domain::advice::errors::AdviceError;
use crate::domain::advice::model::AdviceReply;

pub struct AskAdviceParams {
    pub prompt: String,
}

#[async_trait]
pub trait AskAdviceUseCase: Send + Sync {
    async fn execute(&self, params: AskAdviceParams) -> Result<AdviceReply, AdviceError>;
}
